use rustrict::CensorStr;

/// Screens operator-entered prize labels before they are shown on the wheel.
#[derive(Debug)]
pub struct ProfanityFilter;

impl ProfanityFilter {
    pub fn contains_profanity(text: &str) -> bool {
        text.is_inappropriate()
    }
}
