/// Integer printed with `'` between groups of three digits, e.g. `1'600`.
pub struct NiceInt(u64);

impl From<u64> for NiceInt {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<usize> for NiceInt {
    fn from(value: usize) -> Self {
        Self(value as u64)
    }
}

impl std::fmt::Display for NiceInt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits = self.0.to_string();
        let first = digits.len() % 3;
        let mut groups = Vec::with_capacity(digits.len() / 3 + 1);
        if first != 0 {
            groups.push(&digits[..first]);
        }
        groups.extend(
            digits.as_bytes()[first..]
                .chunks(3)
                .map(|c| std::str::from_utf8(c).unwrap_or_default()),
        );
        write!(f, "{}", groups.join("'"))
    }
}
