use crate::error::ConvertError;

/// Parse a USDA Y/N flag.
///
/// Only uppercase `Y` and `N` are accepted; everything else, including an
/// empty cell, is reported as [`ConvertError::UnknownBoolean`].
pub fn convert_boolean(raw: &str) -> Result<bool, ConvertError> {
    match raw.trim() {
        "Y" => Ok(true),
        "N" => Ok(false),
        other => Err(ConvertError::UnknownBoolean(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converts_y_and_n() {
        assert_eq!(convert_boolean("Y"), Ok(true));
        assert_eq!(convert_boolean("N"), Ok(false));
        assert_eq!(convert_boolean(" Y "), Ok(true));
    }

    #[test]
    fn test_rejects_other_tokens() {
        for token in ["y", "n", "", "Yes", "1", "-"] {
            assert_eq!(
                convert_boolean(token),
                Err(ConvertError::UnknownBoolean(token.to_string())),
                "token {:?}",
                token
            );
        }
    }
}
