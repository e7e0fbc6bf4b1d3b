//! Turns raw address input into an ordered list of candidate strings.

use crate::config::{MAX_IP_LEN, MIN_IP_LEN};
use crate::models::AddressInput;

/// Separators tried in order of preference.
const SEPARATORS: [char; 4] = [',', '\n', ';', ' '];

/// Coarse IPv4-shape filter on an already trimmed token.
fn plausible_length(token: &str) -> bool {
    let len = token.chars().count();
    (MIN_IP_LEN..=MAX_IP_LEN).contains(&len)
}

/// Parse input containing one or more IP addresses.
///
/// A `Text` input is split on the first separator (`,` newline `;` space) that
/// is present and yields at least one plausible token. If none does, the whole
/// trimmed string is the single candidate, subject to the same length filter.
/// Mixed separators are not reconciled: `"a,b c"` splits on `,` only.
///
/// Duplicates are kept so results line up with the caller's input.
pub fn parse_ip_input(input: Option<&AddressInput>) -> Vec<String> {
    match input {
        Some(AddressInput::List(items)) => items
            .iter()
            .map(|ip| ip.trim())
            .filter(|ip| plausible_length(ip))
            .map(String::from)
            .collect(),
        Some(AddressInput::Text(text)) => parse_ip_text(text),
        None => vec![],
    }
}

fn parse_ip_text(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return vec![];
    }

    for separator in SEPARATORS {
        if !text.contains(separator) {
            continue;
        }
        let ip_list: Vec<String> = text
            .split(separator)
            .map(str::trim)
            .filter(|ip| plausible_length(ip))
            .map(String::from)
            .collect();
        if !ip_list.is_empty() {
            log::trace!("split input on {separator:?} into {} token(s)", ip_list.len());
            return ip_list;
        }
    }

    // Single IP case
    if plausible_length(text) {
        vec![text.to_string()]
    } else {
        vec![]
    }
}
