/// Mathematical constants whose digits can drive a walk without any bundled data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constant {
    /// 3.14159...
    Pi,
    /// 2.71828...
    E,
}

impl Constant {
    /// Short lowercase name used by the CLI and in logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "e",
        }
    }

    /// Look a constant up by its [`Constant::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pi" => Some(Self::Pi),
            "e" => Some(Self::E),
            _ => None,
        }
    }

    /// First `count` decimal digits, including the integer part.
    pub fn digits(self, count: usize) -> Vec<u8> {
        match self {
            Self::Pi => pi_digits(count),
            Self::E => e_digits(count),
        }
    }
}

// Extra digits computed past the requested count; the tail of a spigot run can be
// off while carries are still pending.
const GUARD_DIGITS: usize = 8;

/// Rabinowitz–Wagon spigot for pi.
fn pi_digits(count: usize) -> Vec<u8> {
    if count == 0 {
        return Vec::new();
    }
    let n = count + GUARD_DIGITS;
    let len = n * 10 / 3 + 1;
    let mut a = vec![2u64; len];
    // Leading slot is a placeholder zero emitted before the first real predigit.
    let mut out: Vec<u8> = Vec::with_capacity(n + 1);
    let mut nines = 0usize;
    let mut predigit = 0u8;

    for _ in 0..n {
        let mut q = 0u64;
        for i in (1..=len).rev() {
            let den = 2 * i as u64 - 1;
            let x = 10 * a[i - 1] + q * i as u64;
            a[i - 1] = x % den;
            q = x / den;
        }
        a[0] = q % 10;
        q /= 10;

        match q {
            9 => nines += 1,
            10 => {
                out.push(predigit + 1);
                out.extend(std::iter::repeat_n(0, nines));
                predigit = 0;
                nines = 0;
            }
            _ => {
                out.push(predigit);
                predigit = q as u8;
                out.extend(std::iter::repeat_n(9, nines));
                nines = 0;
            }
        }
    }
    out.push(predigit);

    out.into_iter().skip(1).take(count).collect()
}

/// Mixed-radix spigot for e: e - 2 = 1/2! + 1/3! + ...
fn e_digits(count: usize) -> Vec<u8> {
    if count == 0 {
        return Vec::new();
    }
    let len = count + GUARD_DIGITS + 2;
    let mut a = vec![1u64; len];
    let mut out = Vec::with_capacity(count);
    out.push(2);

    while out.len() < count {
        let mut carry = 0u64;
        for i in (0..len).rev() {
            let base = i as u64 + 2;
            let x = a[i] * 10 + carry;
            a[i] = x % base;
            carry = x / base;
        }
        out.push(carry as u8);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/digits/constants.rs"]
mod tests;
