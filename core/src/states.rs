//! U.S. state and territory names and the two-letter codes the NPS API filters on.
//!
//! Names are lowercase, the way a speech host hands them over. Several names may
//! share a code; reverse lookup picks the first one in table order.

/// Name → code table, in lookup order.
pub const STATE_CODES: &[(&str, &str)] = &[
    ("alabama", "AL"),
    ("alaska", "AK"),
    ("arizona", "AZ"),
    ("arkansas", "AR"),
    ("california", "CA"),
    ("colorado", "CO"),
    ("connecticut", "CT"),
    ("delaware", "DE"),
    ("district of columbia", "DC"),
    ("washington dc", "DC"),
    ("dc", "DC"),
    ("florida", "FL"),
    ("georgia", "GA"),
    ("hawaii", "HI"),
    ("idaho", "ID"),
    ("illinois", "IL"),
    ("indiana", "IN"),
    ("iowa", "IA"),
    ("kansas", "KS"),
    ("kentucky", "KY"),
    ("louisiana", "LA"),
    ("maine", "ME"),
    ("maryland", "MD"),
    ("massachusetts", "MA"),
    ("michigan", "MI"),
    ("minnesota", "MN"),
    ("mississippi", "MS"),
    ("missouri", "MO"),
    ("montana", "MT"),
    ("nebraska", "NE"),
    ("nevada", "NV"),
    ("new hampshire", "NH"),
    ("new jersey", "NJ"),
    ("new mexico", "NM"),
    ("new york", "NY"),
    ("north carolina", "NC"),
    ("north dakota", "ND"),
    ("ohio", "OH"),
    ("oklahoma", "OK"),
    ("oregon", "OR"),
    ("pennsylvania", "PA"),
    ("rhode island", "RI"),
    ("south carolina", "SC"),
    ("south dakota", "SD"),
    ("tennessee", "TN"),
    ("texas", "TX"),
    ("utah", "UT"),
    ("vermont", "VT"),
    ("virginia", "VA"),
    ("washington", "WA"),
    ("west virginia", "WV"),
    ("wisconsin", "WI"),
    ("wyoming", "WY"),
];

/// Look up the code for a state name. Exact, case-sensitive match.
pub fn code_for(name: &str) -> Option<&'static str> {
    STATE_CODES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, code)| *code)
}

/// Look up the first state name registered for a code.
pub fn name_for(code: &str) -> Option<&'static str> {
    STATE_CODES
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

/// Expand a comma-separated code list into spoken state names.
///
/// Unknown codes are skipped. With more than one name, the word `"and"` is
/// inserted right before the last one, so `"CA,NV"` becomes
/// `["california", "and", "nevada"]`. No list commas are added for three or
/// more states.
pub fn format_states(states: &str) -> Vec<String> {
    let mut names: Vec<String> = states
        .split(',')
        .filter_map(|code| name_for(code.trim()))
        .map(str::to_string)
        .collect();

    if names.len() > 1 {
        let last = names.len() - 1;
        names.insert(last, "and".to_string());
    }
    names
}

/// Spoken location for a comma-separated code list, e.g. `"california and nevada"`.
pub fn spoken_location(states: &str) -> String {
    format_states(states).join(" ")
}
