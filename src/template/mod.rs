// Alert message placeholder rendering
use crate::format::{group_digits, Grouping};
use crate::models::ExpireDuration;

/// Placeholder tokens recognised in alert templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    ExpireTime,
    Hours,
    RaisedAmount,
    InviteesNumber,
    DonorsNumber,
}

impl Placeholder {
    pub const ALL: [Placeholder; 5] = [
        Placeholder::ExpireTime,
        Placeholder::Hours,
        Placeholder::RaisedAmount,
        Placeholder::InviteesNumber,
        Placeholder::DonorsNumber,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ExpireTime => "{expire time}",
            Placeholder::Hours => "{hours}",
            Placeholder::RaisedAmount => "{raised amount}",
            Placeholder::InviteesNumber => "{invitees number}",
            Placeholder::DonorsNumber => "{donors number}",
        }
    }

    fn matching(text: &str) -> Option<Placeholder> {
        Self::ALL
            .into_iter()
            .find(|placeholder| text.starts_with(placeholder.token()))
    }
}

/// Live values substituted into a template preview
#[derive(Debug, Clone, Default)]
pub struct PreviewValues {
    pub expire: ExpireDuration,
    /// Already formatted by the caller, e.g. `$2,12,312.39`
    pub raised_amount_text: String,
    pub invitees_count: u64,
    pub donors_count: u64,
    pub grouping: Grouping,
}

impl PreviewValues {
    fn value_for(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::ExpireTime => self.expire.to_string(),
            Placeholder::Hours => self.expire.hours.to_string(),
            Placeholder::RaisedAmount => self.raised_amount_text.clone(),
            Placeholder::InviteesNumber => group_digits(self.invitees_count, self.grouping),
            Placeholder::DonorsNumber => group_digits(self.donors_count, self.grouping),
        }
    }
}

/// Replace every recognised placeholder in `template` with its live value.
///
/// Unrecognised `{...}` sequences are copied through untouched. Substituted
/// values are never rescanned.
pub fn render_preview(template: &str, values: &PreviewValues) -> String {
    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rendered.push_str(&rest[..open]);
        rest = &rest[open..];

        match Placeholder::matching(rest) {
            Some(placeholder) => {
                rendered.push_str(&values.value_for(placeholder));
                rest = &rest[placeholder.token().len()..];
            }
            None => {
                rendered.push('{');
                rest = &rest[1..];
            }
        }
    }

    rendered.push_str(rest);
    rendered
}

/// `{...}` sequences in `template` that are not recognised placeholders
pub fn unknown_placeholders(template: &str) -> Vec<String> {
    let mut unknown = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        rest = &rest[open..];
        let Some(close) = rest[1..].find(['{', '}']).map(|i| i + 1) else {
            break;
        };

        if rest[close..].starts_with('{') {
            rest = &rest[close..];
            continue;
        }

        let candidate = &rest[..=close];
        if Placeholder::matching(candidate).is_none() {
            unknown.push(candidate.to_string());
        }
        rest = &rest[close + 1..];
    }

    unknown
}
