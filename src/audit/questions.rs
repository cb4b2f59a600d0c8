use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Company,
    RfqsPerDay,
    QuoteTurnaround,
    ResponseSpeed,
    EmailVolume,
    ChasingFrequency,
    StaffCount,
    VisibilityLevel,
    MainBottleneck,
    ProcessConsistency,
    ErrorFrequency,
    AverageOrderValue,
}

impl FieldId {
    pub const ALL: [FieldId; 14] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Company,
        FieldId::RfqsPerDay,
        FieldId::QuoteTurnaround,
        FieldId::ResponseSpeed,
        FieldId::EmailVolume,
        FieldId::ChasingFrequency,
        FieldId::StaffCount,
        FieldId::VisibilityLevel,
        FieldId::MainBottleneck,
        FieldId::ProcessConsistency,
        FieldId::ErrorFrequency,
        FieldId::AverageOrderValue,
    ];

    /// Key used in the stored draft and the webhook payload.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Company => "company",
            FieldId::RfqsPerDay => "rfqs_per_day",
            FieldId::QuoteTurnaround => "quote_turnaround",
            FieldId::ResponseSpeed => "response_speed",
            FieldId::EmailVolume => "email_volume",
            FieldId::ChasingFrequency => "chasing_frequency",
            FieldId::StaffCount => "staff_count",
            FieldId::VisibilityLevel => "visibility_level",
            FieldId::MainBottleneck => "main_bottleneck",
            FieldId::ProcessConsistency => "process_consistency",
            FieldId::ErrorFrequency => "error_frequency",
            FieldId::AverageOrderValue => "average_order_value",
        }
    }
}

/// Every answer collected by the wizard. Missing keys in a stored draft come
/// back as empty strings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct AnswerSet {
    pub name: String,
    pub email: String,
    pub company: String,
    pub rfqs_per_day: String,
    pub quote_turnaround: String,
    pub response_speed: String,
    pub email_volume: String,
    pub chasing_frequency: String,
    pub staff_count: String,
    pub visibility_level: String,
    pub main_bottleneck: String,
    pub process_consistency: String,
    pub error_frequency: String,
    pub average_order_value: String,
}

impl AnswerSet {
    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Company => &self.company,
            FieldId::RfqsPerDay => &self.rfqs_per_day,
            FieldId::QuoteTurnaround => &self.quote_turnaround,
            FieldId::ResponseSpeed => &self.response_speed,
            FieldId::EmailVolume => &self.email_volume,
            FieldId::ChasingFrequency => &self.chasing_frequency,
            FieldId::StaffCount => &self.staff_count,
            FieldId::VisibilityLevel => &self.visibility_level,
            FieldId::MainBottleneck => &self.main_bottleneck,
            FieldId::ProcessConsistency => &self.process_consistency,
            FieldId::ErrorFrequency => &self.error_frequency,
            FieldId::AverageOrderValue => &self.average_order_value,
        }
    }

    pub fn set(&mut self, id: FieldId, value: String) {
        let slot = match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Company => &mut self.company,
            FieldId::RfqsPerDay => &mut self.rfqs_per_day,
            FieldId::QuoteTurnaround => &mut self.quote_turnaround,
            FieldId::ResponseSpeed => &mut self.response_speed,
            FieldId::EmailVolume => &mut self.email_volume,
            FieldId::ChasingFrequency => &mut self.chasing_frequency,
            FieldId::StaffCount => &mut self.staff_count,
            FieldId::VisibilityLevel => &mut self.visibility_level,
            FieldId::MainBottleneck => &mut self.main_bottleneck,
            FieldId::ProcessConsistency => &mut self.process_consistency,
            FieldId::ErrorFrequency => &mut self.error_frequency,
            FieldId::AverageOrderValue => &mut self.average_order_value,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        FieldId::ALL.iter().all(|id| self.get(*id).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Select(&'static [SelectOption]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub helper_text: Option<&'static str>,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepDefinition {
    pub number: usize,
    pub title: &'static str,
    pub intro: &'static str,
    /// Seconds.
    pub estimated_time: u32,
    pub fields: &'static [FieldDefinition],
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

const fn select(
    id: FieldId,
    label: &'static str,
    required: bool,
    options: &'static [SelectOption],
) -> FieldDefinition {
    FieldDefinition {
        id,
        label,
        placeholder: None,
        helper_text: None,
        required,
        kind: FieldKind::Select(options),
    }
}

pub const CONTACT_FIELDS: &[FieldDefinition] = &[
    FieldDefinition {
        id: FieldId::Name,
        label: "Your Name",
        placeholder: Some("John Smith"),
        helper_text: None,
        required: true,
        kind: FieldKind::Text,
    },
    FieldDefinition {
        id: FieldId::Email,
        label: "Work Email",
        placeholder: Some("john@company.com"),
        helper_text: Some("Your report is sent here"),
        required: true,
        kind: FieldKind::Email,
    },
    FieldDefinition {
        id: FieldId::Company,
        label: "Company Name",
        placeholder: Some("Acme Distribution Ltd"),
        helper_text: None,
        required: true,
        kind: FieldKind::Text,
    },
];

const RFQS_PER_DAY: &[SelectOption] = &[
    opt("", "Select average daily volume..."),
    opt("0-5", "0-5 per day"),
    opt("5-10", "5-10 per day"),
    opt("10-20", "10-20 per day"),
    opt("20-30", "20-30 per day"),
    opt("30-50", "30-50 per day"),
    opt("50-75", "50-75 per day"),
    opt("75-100", "75-100 per day"),
    opt("100+", "100+ per day"),
];

const QUOTE_TURNAROUND: &[SelectOption] = &[
    opt("", "Select typical turnaround time..."),
    opt("<30min", "Under 30 minutes"),
    opt("30min-1hr", "30 minutes to 1 hour"),
    opt("1-2hrs", "1-2 hours"),
    opt("2-4hrs", "2-4 hours"),
    opt("4-8hrs", "4-8 hours (same day)"),
    opt("8-24hrs", "8-24 hours (next day)"),
    opt("1-2days", "1-2 business days"),
    opt("2-3days", "2-3 business days"),
    opt("3-5days", "3-5 business days"),
    opt("5+days", "Over 5 business days"),
];

const RESPONSE_SPEED: &[SelectOption] = &[
    opt("", "Select typical first response time..."),
    opt("<1min", "Under 1 minute (instant)"),
    opt("1-5min", "1-5 minutes"),
    opt("5-15min", "5-15 minutes"),
    opt("15-30min", "15-30 minutes"),
    opt("30min-1hr", "30 minutes to 1 hour"),
    opt("1-2hrs", "1-2 hours"),
    opt("2-4hrs", "2-4 hours"),
    opt("4-8hrs", "4-8 hours (same day)"),
    opt("same-day", "Same day (within 8 hours)"),
    opt("next-day", "Next business day"),
    opt("2+days", "2+ business days"),
];

const EMAIL_VOLUME: &[SelectOption] = &[
    opt("", "Select daily email volume..."),
    opt("0-10", "0-10 emails per day"),
    opt("10-25", "10-25 emails per day"),
    opt("25-50", "25-50 emails per day"),
    opt("50-75", "50-75 emails per day"),
    opt("75-100", "75-100 emails per day"),
    opt("100-150", "100-150 emails per day"),
    opt("150-200", "150-200 emails per day"),
    opt("200-300", "200-300 emails per day"),
    opt("300+", "Over 300 emails per day"),
];

const CHASING_FREQUENCY: &[SelectOption] = &[
    opt("", "Select how often this happens..."),
    opt("never", "Almost never - we're on top of it"),
    opt("rarely", "Rarely - once or twice a week"),
    opt("sometimes", "Sometimes - a few times per week"),
    opt("often", "Often - multiple times per day"),
    opt("constantly", "Constantly - it's a daily problem"),
];

const STAFF_COUNT: &[SelectOption] = &[
    opt("", "Select number of staff..."),
    opt("1", "Just 1 person"),
    opt("2", "2 people"),
    opt("3-5", "3-5 people"),
    opt("6-10", "6-10 people"),
    opt("11-15", "11-15 people"),
    opt("15+", "Over 15 people"),
];

const VISIBILITY_LEVEL: &[SelectOption] = &[
    opt("", "Select current visibility level..."),
    opt("full", "Full visibility - we track everything in real-time"),
    opt("good", "Good - we can find most things when we need to"),
    opt("partial", "Partial - some things slip through the cracks"),
    opt("limited", "Limited - mostly in people's heads and spreadsheets"),
    opt("none", "Almost none - constant firefighting and searching"),
];

const MAIN_BOTTLENECK: &[SelectOption] = &[
    opt("", "Select your main bottleneck..."),
    opt("quoting-speed", "Quote turnaround time is too slow"),
    opt("response-time", "Responding to enquiries takes too long"),
    opt("customer-comms", "Keeping customers updated and informed"),
    opt("data-entry", "Manual data entry and admin work"),
    opt("visibility", "Not knowing what's happening in real-time"),
    opt("staff-capacity", "Team is overwhelmed with volume"),
    opt("all", "All of the above - multiple issues"),
];

const PROCESS_CONSISTENCY: &[SelectOption] = &[
    opt("", "Select process consistency level..."),
    opt("very-consistent", "Very consistent - everyone follows the same process"),
    opt("mostly-consistent", "Mostly consistent - minor variations between people"),
    opt("somewhat-consistent", "Somewhat consistent - depends on who handles it"),
    opt("inconsistent", "Inconsistent - everyone has their own way"),
    opt("chaotic", "Chaotic - no standard process at all"),
];

const ERROR_FREQUENCY: &[SelectOption] = &[
    opt("", "Select how often errors happen..."),
    opt("almost-never", "Almost never - very rare"),
    opt("rare", "Rare - once or twice a month"),
    opt("occasional", "Occasional - a few times per week"),
    opt("frequent", "Frequent - multiple times per week"),
    opt("daily", "Daily - happens every single day"),
];

const AVERAGE_ORDER_VALUE: &[SelectOption] = &[
    opt("", "Prefer not to say"),
    opt("<250", "Under £250"),
    opt("250-500", "£250 - £500"),
    opt("500-1k", "£500 - £1,000"),
    opt("1k-2k", "£1,000 - £2,000"),
    opt("2k-5k", "£2,000 - £5,000"),
    opt("5k-10k", "£5,000 - £10,000"),
    opt("10k-25k", "£10,000 - £25,000"),
    opt("25k-50k", "£25,000 - £50,000"),
    opt("50k+", "Over £50,000"),
];

pub const AUDIT_STEPS: &[StepDefinition] = &[
    StepDefinition {
        number: 1,
        title: "Quote & Enquiry Speed",
        intro: "Slow responses hand business to faster competitors. Slow quoting leaks margin and kills confidence.",
        estimated_time: 20,
        fields: &[
            select(
                FieldId::RfqsPerDay,
                "How many quote requests (RFQs) do you receive per day?",
                true,
                RFQS_PER_DAY,
            ),
            select(
                FieldId::QuoteTurnaround,
                "How long does it typically take you to send a quote after receiving an RFQ?",
                true,
                QUOTE_TURNAROUND,
            ),
            select(
                FieldId::ResponseSpeed,
                "How quickly do you typically respond to new customer enquiries (first reply)?",
                true,
                RESPONSE_SPEED,
            ),
        ],
    },
    StepDefinition {
        number: 2,
        title: "Workload & Pressure Points",
        intro: "High inbox volume and constant chasing drag your team away from the work that matters and create hidden labour costs.",
        estimated_time: 15,
        fields: &[
            select(
                FieldId::EmailVolume,
                "How many customer emails does your team handle per day (total across all staff)?",
                true,
                EMAIL_VOLUME,
            ),
            select(
                FieldId::ChasingFrequency,
                "How often do customers chase you for updates, quotes or responses?",
                true,
                CHASING_FREQUENCY,
            ),
            select(
                FieldId::StaffCount,
                "How many people spend significant time on quoting, emails and customer admin?",
                true,
                STAFF_COUNT,
            ),
        ],
    },
    StepDefinition {
        number: 3,
        title: "Operational Reality Check",
        intro: "Inconsistent processes, hidden bottlenecks and lack of visibility make it impossible to scale without more people and more pressure.",
        estimated_time: 10,
        fields: &[
            select(
                FieldId::VisibilityLevel,
                "How much visibility do you have across quotes, orders and customer interactions?",
                true,
                VISIBILITY_LEVEL,
            ),
            select(
                FieldId::MainBottleneck,
                "What is your biggest operational bottleneck right now?",
                true,
                MAIN_BOTTLENECK,
            ),
            select(
                FieldId::ProcessConsistency,
                "How consistent are your processes across the team?",
                true,
                PROCESS_CONSISTENCY,
            ),
            select(
                FieldId::ErrorFrequency,
                "How often do errors occur (wrong quotes, missed emails, incorrect data)?",
                true,
                ERROR_FREQUENCY,
            ),
            FieldDefinition {
                id: FieldId::AverageOrderValue,
                label: "What is your typical order value? (optional but helps personalise your report)",
                placeholder: None,
                helper_text: Some("This helps us calculate your potential revenue recovery more accurately"),
                required: false,
                kind: FieldKind::Select(AVERAGE_ORDER_VALUE),
            },
        ],
    },
];

/// Index into the wizard: 0 is the contact screen, `1..=N` the audit steps and
/// `N + 1` the confirmation screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Step(usize);

impl Step {
    pub const CONTACT: Step = Step(0);
    pub const CONFIRMATION: Step = Step(AUDIT_STEPS.len() + 1);

    pub fn from_index(index: usize) -> Option<Step> {
        (index <= Self::CONFIRMATION.0).then_some(Step(index))
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn is_contact(self) -> bool {
        self == Self::CONTACT
    }

    pub fn is_confirmation(self) -> bool {
        self == Self::CONFIRMATION
    }

    pub fn is_audit(self) -> bool {
        self.0 >= 1 && self.0 <= AUDIT_STEPS.len()
    }

    pub fn is_last_audit(self) -> bool {
        self.0 == AUDIT_STEPS.len()
    }

    /// Past the contact screen but not yet submitted; only these steps are
    /// worth keeping as a draft.
    pub fn is_mid_flow(self) -> bool {
        self.is_audit()
    }

    pub fn definition(self) -> Option<&'static StepDefinition> {
        if self.is_audit() {
            AUDIT_STEPS.get(self.0 - 1)
        } else {
            None
        }
    }

    pub fn fields(self) -> &'static [FieldDefinition] {
        if self.is_contact() {
            CONTACT_FIELDS
        } else {
            self.definition().map(|d| d.fields).unwrap_or(&[])
        }
    }

    pub(crate) fn forward(self) -> Step {
        Step((self.0 + 1).min(Self::CONFIRMATION.0))
    }

    pub(crate) fn backward(self) -> Step {
        Step(self.0.saturating_sub(1))
    }
}

pub fn field(id: FieldId) -> Option<&'static FieldDefinition> {
    all_fields().find(|f| f.id == id)
}

fn all_fields() -> impl Iterator<Item = &'static FieldDefinition> {
    CONTACT_FIELDS
        .iter()
        .chain(AUDIT_STEPS.iter().flat_map(|s| s.fields.iter()))
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("field `{0}` is configured {1} times")]
    Duplicate(&'static str, usize),
    #[error("field `{0}` is not used by any step")]
    Unused(&'static str),
    #[error("select `{0}` must start with an empty placeholder option")]
    MissingPlaceholder(&'static str),
    #[error("step {0} is numbered out of order")]
    StepNumber(usize),
}

/// Checks the question table against `AnswerSet`: every field is asked exactly
/// once and every select opens on an empty choice.
pub fn check_table() -> Result<(), TableError> {
    for id in FieldId::ALL {
        match all_fields().filter(|f| f.id == id).count() {
            0 => return Err(TableError::Unused(id.as_str())),
            1 => {}
            n => return Err(TableError::Duplicate(id.as_str(), n)),
        }
    }
    for f in all_fields() {
        if let FieldKind::Select(options) = f.kind {
            if options.first().map(|o| o.value) != Some("") {
                return Err(TableError::MissingPlaceholder(f.id.as_str()));
            }
        }
    }
    for (i, step) in AUDIT_STEPS.iter().enumerate() {
        if step.number != i + 1 {
            return Err(TableError::StepNumber(step.number));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_table_is_consistent() {
        assert_eq!(check_table(), Ok(()));
        assert_eq!(AUDIT_STEPS.len(), 3);
        assert_eq!(Step::CONFIRMATION.index(), 4);
    }

    #[test]
    fn answer_set_serializes_with_field_ids() {
        let mut answers = AnswerSet::default();
        for id in FieldId::ALL {
            answers.set(id, format!("v-{}", id.as_str()));
        }
        let json = serde_json::to_value(&answers).unwrap();
        for id in FieldId::ALL {
            assert_eq!(json[id.as_str()], format!("v-{}", id.as_str()));
            assert_eq!(answers.get(id), format!("v-{}", id.as_str()));
        }
    }

    #[test]
    fn missing_keys_read_back_as_empty() {
        let answers: AnswerSet =
            serde_json::from_str(r#"{"name":"Jane","legacy_field":"x"}"#).unwrap();
        assert_eq!(answers.name, "Jane");
        assert_eq!(answers.email, "");
        assert!(!answers.is_empty());
        assert!(AnswerSet::default().is_empty());
    }

    #[test]
    fn step_bounds() {
        assert_eq!(Step::CONTACT.backward(), Step::CONTACT);
        assert_eq!(Step::CONFIRMATION.forward(), Step::CONFIRMATION);
        assert!(Step::from_index(5).is_none());
        let last = Step::from_index(3).unwrap();
        assert!(last.is_last_audit() && last.is_mid_flow());
        assert_eq!(Step::CONTACT.fields().len(), 3);
        assert!(Step::CONFIRMATION.fields().is_empty());
        assert_eq!(field(FieldId::AverageOrderValue).map(|f| f.required), Some(false));
    }
}
