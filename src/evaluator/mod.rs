// src/evaluator/mod.rs
use serde::{Deserialize, Serialize};

use crate::models::{CheckOutcome, StrengthReport, StrengthTier};

pub mod common;

pub use common::DenyList;

/// One of the fixed checks run against every candidate.
///
/// Variant order is the order checks run and feedback is emitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Check {
    Length,
    MinLength,
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
    NoCommon,
    NoRepeated,
}

struct Rule {
    check: Check,
    name: &'static str,
    label: &'static str,
    remediation: &'static str,
    passes: fn(&str, &DenyList) -> bool,
}

static RULES: [Rule; 8] = [
    Rule {
        check: Check::Length,
        name: "length",
        label: "8+ characters",
        remediation: "Use at least 8 characters",
        passes: |pwd, _| pwd.chars().count() >= 8,
    },
    Rule {
        check: Check::MinLength,
        name: "minLength",
        label: "12+ characters",
        remediation: "Consider using 12+ characters for better security",
        passes: |pwd, _| pwd.chars().count() >= 12,
    },
    Rule {
        check: Check::Uppercase,
        name: "uppercase",
        label: "Uppercase letters",
        remediation: "Add uppercase letters (A-Z)",
        passes: |pwd, _| pwd.chars().any(|c| c.is_ascii_uppercase()),
    },
    Rule {
        check: Check::Lowercase,
        name: "lowercase",
        label: "Lowercase letters",
        remediation: "Add lowercase letters (a-z)",
        passes: |pwd, _| pwd.chars().any(|c| c.is_ascii_lowercase()),
    },
    Rule {
        check: Check::Numbers,
        name: "numbers",
        label: "Numbers",
        remediation: "Include numbers (0-9)",
        passes: |pwd, _| pwd.chars().any(|c| c.is_ascii_digit()),
    },
    Rule {
        check: Check::Symbols,
        name: "symbols",
        label: "Special characters",
        remediation: "Use special characters (!@#$...)",
        passes: |pwd, _| pwd.chars().any(|c| !c.is_ascii_alphanumeric()),
    },
    Rule {
        check: Check::NoCommon,
        name: "noCommon",
        label: "Not common password",
        remediation: "Avoid common passwords",
        passes: |pwd, deny_list| !deny_list.contains(pwd),
    },
    Rule {
        check: Check::NoRepeated,
        name: "noRepeated",
        label: "No repeated patterns",
        remediation: "Avoid repeated character patterns",
        passes: |pwd, _| !has_repeated_run(pwd),
    },
];

impl Check {
    pub const ALL: [Check; 8] = [
        Check::Length,
        Check::MinLength,
        Check::Uppercase,
        Check::Lowercase,
        Check::Numbers,
        Check::Symbols,
        Check::NoCommon,
        Check::NoRepeated,
    ];

    fn rule(&self) -> &'static Rule {
        &RULES[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.rule().name
    }

    pub fn label(&self) -> &'static str {
        self.rule().label
    }

    pub fn remediation(&self) -> &'static str {
        self.rule().remediation
    }
}

// `.` in a regex does not match line terminators
fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// True when any character appears three or more times in a row.
pub fn has_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
            continue;
        }

        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }

        if run >= 3 {
            return true;
        }
    }

    false
}

fn percentage(score: u8, total: usize) -> u8 {
    // round(100 * score / total), halves rounded up
    let total = total as u32;
    ((200 * u32::from(score) + total) / (2 * total)) as u8
}

/// Scores passwords against the check battery with a given deny-list.
#[derive(Debug, Clone)]
pub struct Evaluator {
    deny_list: DenyList,
}

impl Evaluator {
    pub fn new(deny_list: DenyList) -> Self {
        Self { deny_list }
    }

    pub fn deny_list(&self) -> &DenyList {
        &self.deny_list
    }

    pub fn evaluate(&self, password: &str) -> StrengthReport {
        evaluate_with(password, &self.deny_list)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DenyList::builtin().clone())
    }
}

/// Evaluate `password` against the built-in deny-list.
///
/// Total over all strings. The empty string fails every check, including
/// the two that would otherwise hold vacuously.
pub fn evaluate(password: &str) -> StrengthReport {
    evaluate_with(password, DenyList::builtin())
}

fn evaluate_with(password: &str, deny_list: &DenyList) -> StrengthReport {
    let checks: Vec<CheckOutcome> = RULES
        .iter()
        .map(|rule| CheckOutcome {
            check: rule.check,
            passed: !password.is_empty() && (rule.passes)(password, deny_list),
        })
        .collect();

    let score = checks.iter().filter(|outcome| outcome.passed).count() as u8;
    let percentage = percentage(score, RULES.len());
    let tier = StrengthTier::from_percentage(percentage);

    let feedback = checks
        .iter()
        .filter(|outcome| !outcome.passed)
        .map(|outcome| outcome.check.remediation().to_string())
        .collect();

    log::debug!("Evaluated password: {}/{} checks passed ({})", score, RULES.len(), tier);

    StrengthReport {
        checks,
        score,
        percentage,
        tier,
        feedback,
    }
}
