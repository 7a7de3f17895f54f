//! Amount and fee formatting for transfer rows.
//!
//! Fiat amounts follow en-US currency conventions (`$1,234.50`, `€10.00`,
//! `¥1,235`). Crypto assets and anything the currency formatter rejects are
//! shown as a grouped two-decimal number followed by the code.

use crate::error::CurrencyError;

/// Asset codes that are never treated as ISO currencies.
pub const CRYPTO_CURRENCIES: [&str; 8] = ["USDT", "BTC", "ETH", "USDC", "BNB", "ADA", "DOT", "MATIC"];

/// en-US display symbols. Other codes are shown by code.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("AUD", "A$"),
    ("BRL", "R$"),
    ("CAD", "CA$"),
    ("CNY", "CN¥"),
    ("EUR", "€"),
    ("GBP", "£"),
    ("HKD", "HK$"),
    ("ILS", "₪"),
    ("INR", "₹"),
    ("JPY", "¥"),
    ("KRW", "₩"),
    ("MXN", "MX$"),
    ("NZD", "NZ$"),
    ("PHP", "₱"),
    ("TWD", "NT$"),
    ("USD", "$"),
    ("VND", "₫"),
    ("XAF", "FCFA"),
    ("XCD", "EC$"),
    ("XOF", "F CFA"),
    ("XPF", "CFPF"),
];

/// Fraction digits of currencies that do not use two.
const MINOR_UNIT_DIGITS: &[(&str, usize)] = &[
    ("ADP", 0),
    ("AFN", 0),
    ("ALL", 0),
    ("BHD", 3),
    ("BIF", 0),
    ("BYR", 0),
    ("CLF", 4),
    ("CLP", 0),
    ("DJF", 0),
    ("ESP", 0),
    ("GNF", 0),
    ("IQD", 0),
    ("IRR", 0),
    ("ISK", 0),
    ("ITL", 0),
    ("JOD", 3),
    ("JPY", 0),
    ("KMF", 0),
    ("KPW", 0),
    ("KRW", 0),
    ("KWD", 3),
    ("LAK", 0),
    ("LBP", 0),
    ("LUF", 0),
    ("LYD", 3),
    ("MGA", 0),
    ("MGF", 0),
    ("MMK", 0),
    ("MRO", 0),
    ("OMR", 3),
    ("PYG", 0),
    ("RSD", 0),
    ("RWF", 0),
    ("SLL", 0),
    ("SOS", 0),
    ("STD", 0),
    ("SYP", 0),
    ("TMM", 0),
    ("TND", 3),
    ("TRL", 0),
    ("UGX", 0),
    ("UYI", 0),
    ("UYW", 4),
    ("VND", 0),
    ("VUV", 0),
    ("XAF", 0),
    ("XOF", 0),
    ("XPF", 0),
    ("YER", 0),
    ("ZMK", 0),
    ("ZWD", 0),
];

/// Formats a transfer amount for display. Never fails.
///
/// Crypto codes, and codes the currency formatter rejects, produce
/// `"1,234.50 BTC"`; everything else goes through [`format_currency`].
pub fn format_amount(amount: f64, currency: &str) -> String {
    if is_crypto(currency) {
        return plain_with_code(amount, currency);
    }

    match format_currency(amount, currency) {
        Ok(formatted) => formatted,
        Err(err) => {
            log::debug!("Falling back to plain amount display: {err}");
            plain_with_code(amount, currency)
        }
    }
}

/// en-US currency formatting using `code` as the unit.
///
/// Any three-letter code is accepted (case-insensitively); codes without a
/// known symbol are shown as `"CHF\u{a0}1,234.50"`.
pub fn format_currency(amount: f64, code: &str) -> Result<String, CurrencyError> {
    if code.is_empty() {
        return Err(CurrencyError::Empty);
    }
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(CurrencyError::Malformed(code.to_owned()));
    }

    let code = code.to_ascii_uppercase();
    let sign = if amount < 0.0 { "-" } else { "" };
    let digits = minor_unit_digits(&code);
    let number = group_fixed(amount.abs(), digits);

    let symbol = CURRENCY_SYMBOLS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code.as_str(), |(_, symbol)| *symbol);
    // A symbol ending in a letter is kept apart from the digits.
    let spacing = if symbol.ends_with(|c: char| c.is_alphabetic()) {
        "\u{a0}"
    } else {
        ""
    };
    Ok(format!("{sign}{symbol}{spacing}{number}"))
}

/// Fee column display: a dollar sign and the number as is.
pub fn format_fee(fee: f64) -> String {
    format!("${fee}")
}

fn minor_unit_digits(code: &str) -> usize {
    MINOR_UNIT_DIGITS
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(2, |(_, digits)| *digits)
}

fn is_crypto(currency: &str) -> bool {
    CRYPTO_CURRENCIES
        .iter()
        .any(|code| code.eq_ignore_ascii_case(currency))
}

fn plain_with_code(amount: f64, currency: &str) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{} {currency}", group_fixed(amount.abs(), 2))
}

/// Fixed-point rendering of a non-negative value with `,` thousands groups.
///
/// Rounds half away from zero on the shortest decimal form of the value, so
/// `1.005` becomes `1.01` and `0.125` becomes `0.13`.
fn group_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let (whole, fraction) = round_decimal(value, digits);

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + digits + 1);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if digits > 0 {
        grouped.push('.');
        grouped.push_str(&fraction);
    }
    grouped
}

/// Splits the rounded decimal digits of `value` into whole and fraction parts.
///
/// Works on the `f64` display form, which is the shortest round-tripping
/// decimal and never uses an exponent.
fn round_decimal(value: f64, digits: usize) -> (String, String) {
    let repr = value.to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut kept: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if fraction.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, b'1');
        }
    }

    let split = kept.len() - digits;
    let whole = kept[..split].iter().copied().map(char::from).collect();
    let fraction = kept[split..].iter().copied().map(char::from).collect();
    (whole, fraction)
}
