/// Neutral gradient for entries without colors.
pub const NEUTRAL_GRADIENT: &str = "linear-gradient(135deg, #555 0%, #333 100%)";

/// Flag-like CSS background for an ordered list of colors.
///
/// - no colors: [`NEUTRAL_GRADIENT`]
/// - two colors: diagonal split with a thin 48%/52% seam
/// - three colors: three equal diagonal bands
/// - anything else: two-stop gradient from the first to the last color
pub fn flag_gradient<S: AsRef<str>>(colors: &[S]) -> String {
    match colors {
        [] => NEUTRAL_GRADIENT.to_string(),
        [a, b] => {
            let (a, b) = (a.as_ref(), b.as_ref());
            format!(
                "linear-gradient(135deg, {a} 0%, {a} 48%, {b} 52%, {b} 100%)"
            )
        }
        [a, b, c] => {
            let (a, b, c) = (a.as_ref(), b.as_ref(), c.as_ref());
            format!(
                "linear-gradient(135deg, {a} 0%, {a} 33%, {b} 33%, {b} 66%, {c} 66%, {c} 100%)"
            )
        }
        [only] => two_stop(only.as_ref(), only.as_ref()),
        [first, .., last] => two_stop(first.as_ref(), last.as_ref()),
    }
}

fn two_stop(first: &str, last: &str) -> String {
    format!("linear-gradient(135deg, {first} 0%, {last} 100%)")
}

#[cfg(test)]
mod tests {
    use super::{NEUTRAL_GRADIENT, flag_gradient};

    #[test]
    fn empty_list_uses_neutral_fallback() {
        let empty: [&str; 0] = [];
        assert_eq!(flag_gradient(&empty), NEUTRAL_GRADIENT);
        assert_eq!(flag_gradient(&Vec::<String>::new()), NEUTRAL_GRADIENT);
    }

    #[test]
    fn two_colors_split_with_thin_seam() {
        assert_eq!(
            flag_gradient(&["#006847", "#CE1126"]),
            "linear-gradient(135deg, #006847 0%, #006847 48%, #CE1126 52%, #CE1126 100%)"
        );
    }

    #[test]
    fn three_colors_form_equal_bands() {
        let css = flag_gradient(&["red", "white", "blue"]);
        assert_eq!(
            css,
            "linear-gradient(135deg, red 0%, red 33%, white 33%, white 66%, blue 66%, blue 100%)"
        );
    }

    #[test]
    fn four_or_more_colors_use_first_and_last_only() {
        let css = flag_gradient(&["a", "b", "c", "d"]);
        assert_eq!(css, "linear-gradient(135deg, a 0%, d 100%)");
        assert!(!css.contains(" b ") && !css.contains(" c "));

        let five = flag_gradient(&["a", "b", "c", "d", "e"]);
        assert_eq!(five, "linear-gradient(135deg, a 0%, e 100%)");
    }

    #[test]
    fn single_color_falls_through_to_two_stop() {
        assert_eq!(
            flag_gradient(&["gold".to_string()]),
            "linear-gradient(135deg, gold 0%, gold 100%)"
        );
    }
}
