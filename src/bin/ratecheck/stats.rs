use console::style;

use ratecheck::Attempt;

pub(crate) fn color_attempt(attempt: &Attempt) -> String {
    let out = if attempt.outcome.is_success() {
        style(attempt).green()
    } else if attempt.outcome.is_rate_limited() {
        style(attempt).yellow().bright()
    } else {
        style(attempt).red().bright()
    };
    out.to_string()
}

#[cfg(test)]
mod test {
    use super::*;
    use http::StatusCode;
    use ratecheck::Outcome;

    #[test]
    fn test_color_keeps_text() {
        let attempt = Attempt::new(7, Outcome::Failed(StatusCode::BAD_GATEWAY));
        let colored = console::strip_ansi_codes(&color_attempt(&attempt)).to_string();
        assert_eq!(colored, "Request 7: Error (502)");
    }
}
