use url::form_urlencoded;

pub const OUTLOOK_COMPOSE_URL: &str = "https://outlook.live.com/mail/0/deeplink/compose";
pub const GMAIL_COMPOSE_URL: &str = "https://mail.google.com/mail/";

/// `mailto:` link; the query carries only the non-empty fields.
pub fn mailto_link(to: &str, cc: &str, subject: &str, body: &str) -> String {
    let query = encode(&optional_pairs(cc, ("subject", subject), body));

    if query.is_empty() {
        format!("mailto:{}", to)
    } else {
        format!("mailto:{}?{}", to, query)
    }
}

/// Outlook on the web compose window
pub fn outlook_web_compose_link(to: &str, cc: &str, subject: &str, body: &str) -> String {
    let mut pairs = vec![("to", to)];
    pairs.extend(optional_pairs(cc, ("subject", subject), body));
    pairs.push(("cmd", "new"));

    format!("{}?{}", OUTLOOK_COMPOSE_URL, encode(&pairs))
}

/// Gmail compose window. Gmail names the subject parameter `su`.
pub fn gmail_compose_link(to: &str, cc: &str, subject: &str, body: &str) -> String {
    let mut pairs = vec![("to", to)];
    pairs.extend(optional_pairs(cc, ("su", subject), body));

    format!("{}?view=cm&{}", GMAIL_COMPOSE_URL, encode(&pairs))
}

fn optional_pairs<'a>(
    cc: &'a str,
    subject: (&'static str, &'a str),
    body: &'a str,
) -> Vec<(&'static str, &'a str)> {
    [("cc", cc), subject, ("body", body)]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
}

fn encode(pairs: &[(&str, &str)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}
