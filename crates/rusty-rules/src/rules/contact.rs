//! Contact details: email, phone numbers, hosts and SMS sender ids.

use super::Rules;
use crate::pattern::Pattern;
use crate::rule::Rule;

static EMAIL: Pattern = Pattern::new(
    r#"^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9]|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"#,
);

static PHONE: Pattern = Pattern::new(r"^(?:(?:00|\+)[1-9]{1,3}|0)?[0-9]{1,3}[0-9]{7}$");

// Libyana and Almadar mobile prefixes: 091 to 095
static PHONE_LIBYA: Pattern = Pattern::new(r"^(?:00218|\+218|0)?9[1-5][0-9]{7}$");

static HOST: Pattern = Pattern::new(
    r"(?i)^(?:localhost|(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)|[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z]{2,})+)$",
);

static SENDER_ID: Pattern = Pattern::new(r"^[\p{L}0-9][\p{L}0-9 ,_/|-]*[\p{L}0-9]$");

impl Rules {
    /// Lower-case addresses only; mixed case is rejected.
    pub fn email(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid email");
        self.pattern_rule("email", &EMAIL, msg, true)
    }

    /// International (`00`/`+` country code) or local (leading `0`) numbers
    /// with an 8 to 10 digit subscriber part.
    pub fn phone(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid phone");
        self.pattern_rule("phone", &PHONE, msg, true)
    }

    pub fn phone_libya(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not valid libyan phone");
        self.pattern_rule("phone_libya", &PHONE_LIBYA, msg, true)
    }

    /// `localhost`, a dotted-quad IPv4 address or a DNS hostname. Not trimmed.
    pub fn ip_and_hostname(&self, field: &str) -> Rule {
        let msg = self.message(&self.label(field), "is not a valid hostname address");
        self.pattern_rule("ip_and_hostname", &HOST, msg, false)
    }

    /// The message does not mention the field.
    pub fn sender_id(&self, _field: &str) -> Rule {
        let msg = self.phrase("invalid sender id");
        self.pattern_rule("sender_id", &SENDER_ID, msg, true)
    }
}
