//! Free-text travel-duration parsing and formatting.
//!
//! The option catalog is scraped best-effort data: duration strings arrive
//! in loose `"6h 20m"` shapes, sometimes with components missing or
//! garbled. Parsing never fails — unreadable components count as zero —
//! so one bad record cannot abort a solve.

/// Parses a loosely formatted duration string into whole minutes.
///
/// Recognizes an hours component (`<n>h`) and a minutes component
/// (`<n>m`), in either order. Missing or unparseable components default
/// to 0; fully malformed input yields 0.
///
/// # Examples
///
/// ```
/// use u_itinerary::duration::parse_duration;
///
/// assert_eq!(parse_duration("6h 20m"), 380);
/// assert_eq!(parse_duration("45m"), 45);
/// assert_eq!(parse_duration("2h"), 120);
/// assert_eq!(parse_duration("n/a"), 0);
/// assert_eq!(parse_duration(""), 0);
/// ```
pub fn parse_duration(text: &str) -> u32 {
    let mut hours: Option<u32> = None;
    let mut minutes: Option<u32> = None;
    let mut number: Option<u32> = None;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit));
        } else {
            match ch {
                'h' | 'H' => {
                    if let Some(n) = number.take() {
                        hours.get_or_insert(n);
                    }
                }
                'm' | 'M' => {
                    if let Some(n) = number.take() {
                        minutes.get_or_insert(n);
                    }
                }
                _ => number = None,
            }
        }
    }

    hours
        .unwrap_or(0)
        .saturating_mul(60)
        .saturating_add(minutes.unwrap_or(0))
}

/// Formats whole minutes as a display duration, e.g. `240` → `"4h 00m"`.
///
/// # Examples
///
/// ```
/// use u_itinerary::duration::format_minutes;
///
/// assert_eq!(format_minutes(240), "4h 00m");
/// assert_eq!(format_minutes(95), "1h 35m");
/// assert_eq!(format_minutes(0), "0h 00m");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}
