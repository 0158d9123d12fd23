//! Registry, banking and personal identifiers, plus script-only text.
//!
//! Every check here trims the value and matches the whole of it against a
//! fixed pattern. Several commercial identifiers share a pattern; they stay
//! separate constructors because their messages name different documents.

use super::Rules;
use crate::pattern::Pattern;
use crate::rule::Rule;

static ALNUM_3_20: Pattern = Pattern::new(r"^[A-Za-z0-9]{3,20}$");
static BRANCH_NUMBER: Pattern = Pattern::new(r"^[0-9]{1,10}$");
static ACCOUNT_NUMBER: Pattern = Pattern::new(r"^[0-9]{6,20}$");
static ACCOUNT_CLASS: Pattern = Pattern::new(r"^[A-Za-z0-9]{1,10}$");
static IBAN: Pattern = Pattern::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{11,30}$");
static IBAN_LIBYA: Pattern = Pattern::new(r"^LY[0-9]{2}[0-9]{21}$");
static IDENTIFICATION: Pattern = Pattern::new(r"^[A-Za-z0-9]{5,20}$");
static IDENTIFICATION_DIGITS: Pattern = Pattern::new(r"^[0-9]{5,20}$");
static PASSPORT: Pattern = Pattern::new(r"^[A-Za-z0-9]{6,9}$");
static IDENTITY: Pattern = Pattern::new(r"^[0-9]{6,15}$");
static LICENSE: Pattern = Pattern::new(r"^[A-Za-z0-9/-]{3,20}$");
static EMPLOYEE: Pattern = Pattern::new(r"^[A-Za-z0-9]{1,15}$");
// 1 or 2 (sex), then eleven digits
static NATIONAL_ID: Pattern = Pattern::new(r"^[12][0-9]{11}$");
static FIELD_NAME: Pattern = Pattern::new(r"^[A-Za-z_][A-Za-z0-9_]{0,63}$");
static ENTITY_NAME: Pattern = Pattern::new(r"^[\p{Arabic}\p{Latin}0-9 .,&'()-]{2,100}$");
static ARABIC_ONLY: Pattern = Pattern::new(r"^[[\p{Arabic}&&[\p{L}\p{M}]] ]+$");
static ENGLISH_ONLY: Pattern = Pattern::new(r"^[A-Za-z ]+$");

impl Rules {
    fn identifier(&self, name: &'static str, field: &str, pattern: &'static Pattern, kind: &str) -> Rule {
        let msg = self.message(&self.label(field), &format!("is not a valid {}", kind));
        self.pattern_rule(name, pattern, msg, true)
    }

    pub fn tax_number(&self, field: &str) -> Rule {
        self.identifier("tax_number", field, &ALNUM_3_20, "tax number")
    }

    pub fn commercial_registry(&self, field: &str) -> Rule {
        self.identifier("commercial_registry", field, &ALNUM_3_20, "commercial registry number")
    }

    pub fn commercial_chamber(&self, field: &str) -> Rule {
        self.identifier("commercial_chamber", field, &ALNUM_3_20, "commercial chamber number")
    }

    pub fn commercial_number(&self, field: &str) -> Rule {
        self.identifier("commercial_number", field, &ALNUM_3_20, "commercial number")
    }

    pub fn branch_number(&self, field: &str) -> Rule {
        self.identifier("branch_number", field, &BRANCH_NUMBER, "branch number")
    }

    pub fn account_number(&self, field: &str) -> Rule {
        self.identifier("account_number", field, &ACCOUNT_NUMBER, "account number")
    }

    pub fn account_class(&self, field: &str) -> Rule {
        self.identifier("account_class", field, &ACCOUNT_CLASS, "account class")
    }

    /// Country code, two check digits, 11 to 30 alphanumerics. Upper case,
    /// no spaces. Check digits are not verified.
    pub fn iban(&self, field: &str) -> Rule {
        self.identifier("iban", field, &IBAN, "IBAN")
    }

    /// `LY`, two check digits and 21 digits.
    pub fn iban_libya(&self, field: &str) -> Rule {
        self.identifier("iban_libya", field, &IBAN_LIBYA, "libyan IBAN")
    }

    pub fn identification_number(&self, field: &str) -> Rule {
        self.identifier("identification_number", field, &IDENTIFICATION, "identification number")
    }

    pub fn identification_number_digits(&self, field: &str) -> Rule {
        self.identifier(
            "identification_number_digits",
            field,
            &IDENTIFICATION_DIGITS,
            "identification number",
        )
    }

    pub fn passport_number(&self, field: &str) -> Rule {
        self.identifier("passport_number", field, &PASSPORT, "passport number")
    }

    pub fn identity_number(&self, field: &str) -> Rule {
        self.identifier("identity_number", field, &IDENTITY, "identity number")
    }

    pub fn license_number(&self, field: &str) -> Rule {
        self.identifier("license_number", field, &LICENSE, "license number")
    }

    pub fn employee_number(&self, field: &str) -> Rule {
        self.identifier("employee_number", field, &EMPLOYEE, "employee number")
    }

    pub fn national_id(&self, field: &str) -> Rule {
        self.identifier("national_id", field, &NATIONAL_ID, "national ID number")
    }

    /// Programming-style identifier, up to 64 characters.
    pub fn field_name(&self, field: &str) -> Rule {
        self.identifier("field_name", field, &FIELD_NAME, "field name")
    }

    /// Organisation name in Arabic or Latin script.
    pub fn entity_name(&self, field: &str) -> Rule {
        self.identifier("entity_name", field, &ENTITY_NAME, "entity name")
    }

    pub fn arabic_only(&self, field: &str) -> Rule {
        self.identifier("arabic_only", field, &ARABIC_ONLY, "Arabic text")
    }

    pub fn english_only(&self, field: &str) -> Rule {
        self.identifier("english_only", field, &ENGLISH_ONLY, "English text")
    }
}
