//! Status code interpretation.

/// Human interpretation of a status code by band.
pub fn interpret_status(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "SUCCESS - Website is accessible",
        300..=399 => "REDIRECTION - Check redirect chain",
        400..=499 => "CLIENT ERROR - Access might be restricted",
        500..=599 => "SERVER ERROR - Website might be down or misconfigured",
        _ => "UNKNOWN STATUS CODE",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert!(interpret_status(200).starts_with("SUCCESS"));
        assert!(interpret_status(299).starts_with("SUCCESS"));
        assert!(interpret_status(300).starts_with("REDIRECTION"));
        assert!(interpret_status(399).starts_with("REDIRECTION"));
        assert!(interpret_status(400).starts_with("CLIENT ERROR"));
        assert!(interpret_status(499).starts_with("CLIENT ERROR"));
        assert!(interpret_status(500).starts_with("SERVER ERROR"));
        assert!(interpret_status(599).starts_with("SERVER ERROR"));
    }

    #[test]
    fn test_every_code_in_band() {
        for code in 0..=u16::MAX {
            let message = interpret_status(code);
            let expected = match code / 100 {
                2 => "SUCCESS",
                3 => "REDIRECTION",
                4 => "CLIENT ERROR",
                5 => "SERVER ERROR",
                _ => "UNKNOWN STATUS CODE",
            };
            assert!(message.starts_with(expected), "{} -> {}", code, message);
        }
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(interpret_status(100), "UNKNOWN STATUS CODE");
        assert_eq!(interpret_status(199), "UNKNOWN STATUS CODE");
        assert_eq!(interpret_status(600), "UNKNOWN STATUS CODE");
    }
}
