/// Honorific appended to a family name.
pub const HONORIFIC: &str = "様";

/// Label used when no family name can be derived ("the person in charge").
pub const GENERIC_LABEL: &str = "担当者様";

/// Map an address to an anonymized display label.
///
/// `yamada.taro@example.com` becomes `yamada様`; a local part without a dot
/// (or any string that is not an address at all) becomes [`GENERIC_LABEL`].
pub fn anonymize(address: &str) -> String {
    let local = address.split('@').next().unwrap_or(address);
    let mut segments = local.split('.');

    match (segments.next(), segments.next()) {
        (Some(family), Some(_)) => format!("{}{}", family, HONORIFIC),
        _ => GENERIC_LABEL.to_string(),
    }
}
