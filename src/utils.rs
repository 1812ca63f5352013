use lazy_regex::regex;
use scraper::ElementRef;

const CAPTAIN: &str = "(c)";

/// Trailing hyphen-delimited token of a profile link, e.g.
/// `/cricketers/virat-kohli-253802` -> `253802`.
pub(crate) fn player_id(href: &str) -> String {
    href.rsplit('-').next().unwrap_or(href).to_string()
}

pub(crate) fn normalize_name(raw: &str) -> String {
    let raw = raw.trim_start();
    let raw = raw.strip_prefix(CAPTAIN).unwrap_or(raw);
    let raw = raw.split(CAPTAIN).next().unwrap_or(raw);
    regex!(r"\W+").replace_all(raw, " ").trim().to_string()
}

pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}
