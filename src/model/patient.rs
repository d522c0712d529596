use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Other,
}

impl Sex {
    pub const ALL: [Sex; 3] = [Sex::Male, Sex::Female, Sex::Other];

    pub fn code(self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
            Sex::Other => "O",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
            Sex::Other => "Other",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a recognised sex code")]
pub struct UnknownSex(String);

impl FromStr for Sex {
    type Err = UnknownSex;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Sex::ALL
            .into_iter()
            .find(|sex| sex.code() == value)
            .ok_or_else(|| UnknownSex(value.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub name: String,
    pub identifier: String,
    pub age: f64,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PatientField {
    Name,
    Identifier,
    Age,
    Sex,
}

impl PatientField {
    fn requirement(self) -> &'static str {
        match self {
            PatientField::Name => "Patient name is required",
            PatientField::Identifier => "Patient ID is required",
            PatientField::Age => "Valid age is required",
            PatientField::Sex => "Sex is required",
        }
    }
}

/// Every field that failed validation, keyed by field, each with the message
/// shown under its input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} patient field(s) are invalid", .0.len())]
pub struct FieldErrors(BTreeMap<PatientField, String>);

impl FieldErrors {
    fn reject(&mut self, field: PatientField) {
        self.0.insert(field, field.requirement().to_string());
    }

    pub fn get(&self, field: PatientField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: PatientField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn clear(&mut self, field: PatientField) {
        self.0.remove(&field);
    }

    pub fn fields(&self) -> impl Iterator<Item = PatientField> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw text of the patient form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub identifier: String,
    pub age: String,
    pub sex: String,
}

impl PatientForm {
    pub fn from_record(record: &PatientRecord) -> Self {
        Self {
            name: record.name.clone(),
            identifier: record.identifier.clone(),
            age: record.age.to_string(),
            sex: record.sex.code().to_string(),
        }
    }

    pub fn value(&self, field: PatientField) -> &str {
        match field {
            PatientField::Name => &self.name,
            PatientField::Identifier => &self.identifier,
            PatientField::Age => &self.age,
            PatientField::Sex => &self.sex,
        }
    }

    pub fn set(&mut self, field: PatientField, value: String) {
        match field {
            PatientField::Name => self.name = value,
            PatientField::Identifier => self.identifier = value,
            PatientField::Age => self.age = value,
            PatientField::Sex => self.sex = value,
        }
    }

    /// Checks all four fields independently and reports every failure at once.
    pub fn validate(&self) -> Result<PatientRecord, FieldErrors> {
        let mut errors = FieldErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.reject(PatientField::Name);
        }

        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            errors.reject(PatientField::Identifier);
        }

        let age = parse_age(&self.age);
        if age.is_none() {
            errors.reject(PatientField::Age);
        }

        let sex = self.sex.parse::<Sex>().ok();
        if sex.is_none() {
            errors.reject(PatientField::Sex);
        }

        match (age, sex) {
            (Some(age), Some(sex)) if errors.is_empty() => Ok(PatientRecord {
                name: name.to_string(),
                identifier: identifier.to_string(),
                age,
                sex,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_age(raw: &str) -> Option<f64> {
    let age = raw.trim().parse::<f64>().ok()?;
    if !age.is_finite() || age < 0.0 {
        return None;
    }
    // "-0" parses to negative zero
    Some(if age == 0.0 { 0.0 } else { age })
}

/// Form contents plus the inline errors of the last submission.
#[derive(Debug, Clone, Default)]
pub struct PatientFormState {
    pub form: PatientForm,
    pub errors: FieldErrors,
}

impl PatientFormState {
    pub fn edit(&mut self, field: PatientField, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    pub fn saved(record: &PatientRecord) -> Self {
        Self {
            form: PatientForm::from_record(record),
            errors: FieldErrors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> PatientForm {
        PatientForm {
            name: "Jane Doe".to_string(),
            identifier: "MRN-0042".to_string(),
            age: "57".to_string(),
            sex: "F".to_string(),
        }
    }

    #[test]
    fn valid_form_yields_trimmed_record() {
        let form = PatientForm {
            name: "  Jane Doe ".to_string(),
            identifier: " MRN-0042".to_string(),
            age: " 57 ".to_string(),
            sex: "F".to_string(),
        };

        let record = form.validate().unwrap();
        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.identifier, "MRN-0042");
        assert_eq!(record.age, 57.0);
        assert_eq!(record.sex, Sex::Female);
    }

    #[test]
    fn every_combination_reports_exactly_the_invalid_fields() {
        for mask in 0u8..16 {
            let mut form = valid_form();
            let mut expected = Vec::new();
            if mask & 1 != 0 {
                form.name = "   ".to_string();
                expected.push(PatientField::Name);
            }
            if mask & 2 != 0 {
                form.identifier = String::new();
                expected.push(PatientField::Identifier);
            }
            if mask & 4 != 0 {
                form.age = "-3".to_string();
                expected.push(PatientField::Age);
            }
            if mask & 8 != 0 {
                form.sex = "X".to_string();
                expected.push(PatientField::Sex);
            }

            match form.validate() {
                Ok(_) => assert!(expected.is_empty(), "mask {mask} should fail"),
                Err(errors) => {
                    assert_eq!(errors.fields().collect::<Vec<_>>(), expected, "mask {mask}");
                }
            }
        }
    }

    #[test]
    fn age_must_be_a_finite_non_negative_number() {
        for bad in ["", "abc", "-1", "NaN", "inf", "12 years"] {
            let form = PatientForm {
                age: bad.to_string(),
                ..valid_form()
            };
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(PatientField::Age), Some("Valid age is required"));
        }

        for good in ["0", "-0", "42.5", "1e2"] {
            let form = PatientForm {
                age: good.to_string(),
                ..valid_form()
            };
            let record = form.validate().unwrap();
            assert!(record.age >= 0.0 && record.age.is_sign_positive());
        }
    }

    #[test]
    fn sex_accepts_only_known_codes() {
        assert_eq!("M".parse::<Sex>(), Ok(Sex::Male));
        assert_eq!("O".parse::<Sex>(), Ok(Sex::Other));
        assert!("m".parse::<Sex>().is_err());
        assert!("".parse::<Sex>().is_err());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut state = PatientFormState {
            errors: PatientForm::default().validate().unwrap_err(),
            ..Default::default()
        };
        assert_eq!(state.errors.len(), 4);

        state.edit(PatientField::Name, "J".to_string());
        assert!(!state.errors.contains(PatientField::Name));
        assert!(state.errors.contains(PatientField::Identifier));
        assert!(state.errors.contains(PatientField::Age));
        assert!(state.errors.contains(PatientField::Sex));
    }

    #[test]
    fn saved_state_shows_normalised_values_without_errors() {
        let form = PatientForm {
            name: " Jane Doe ".to_string(),
            age: "1e2".to_string(),
            ..valid_form()
        };
        let state = PatientFormState::saved(&form.validate().unwrap());
        assert_eq!(state.form.name, "Jane Doe");
        assert_eq!(state.form.age, "100");
        assert!(state.errors.is_empty());
    }

    #[test]
    fn form_round_trips_from_record() {
        let record = valid_form().validate().unwrap();
        let form = PatientForm::from_record(&record);
        assert_eq!(form, valid_form());
    }
}
