use std::fmt;

/// One of the fixed respondent-profile fields collected on the demographics
/// step.
///
/// The field set is closed: there is no way to address a field outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemographicField {
    Gender,
    Age,
    Income,
    Activity,
    Marital,
    Education,
    Region,
    Experience,
}

impl DemographicField {
    /// All fields, in form display order.
    pub const ALL: [Self; 8] = [
        Self::Gender,
        Self::Age,
        Self::Income,
        Self::Activity,
        Self::Marital,
        Self::Education,
        Self::Region,
        Self::Experience,
    ];

    /// Stable lowercase name of this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Income => "income",
            Self::Activity => "activity",
            Self::Marital => "marital",
            Self::Education => "education",
            Self::Region => "region",
            Self::Experience => "experience",
        }
    }
}

impl fmt::Display for DemographicField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The respondent profile collected on the trailing demographics step.
///
/// Every field starts unset and is independently optional; setting a field
/// that already holds a value replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemographicProfile {
    gender: Option<String>,
    age: Option<String>,
    income: Option<String>,
    activity: Option<String>,
    marital: Option<String>,
    education: Option<String>,
    region: Option<String>,
    experience: Option<String>,
}

impl DemographicProfile {
    /// Create a new profile with all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one field, replacing any previous value.
    pub fn set(&mut self, field: DemographicField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Get the value of one field, if set.
    pub fn get(&self, field: DemographicField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Iterate over the fields that hold a value, in form display order.
    pub fn answered(&self) -> impl Iterator<Item = (DemographicField, &str)> {
        DemographicField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Number of fields that hold a value.
    pub fn len(&self) -> usize {
        self.answered().count()
    }

    /// Check if no field holds a value.
    pub fn is_empty(&self) -> bool {
        self.answered().next().is_none()
    }

    /// Unset all fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot(&self, field: DemographicField) -> &Option<String> {
        match field {
            DemographicField::Gender => &self.gender,
            DemographicField::Age => &self.age,
            DemographicField::Income => &self.income,
            DemographicField::Activity => &self.activity,
            DemographicField::Marital => &self.marital,
            DemographicField::Education => &self.education,
            DemographicField::Region => &self.region,
            DemographicField::Experience => &self.experience,
        }
    }

    fn slot_mut(&mut self, field: DemographicField) -> &mut Option<String> {
        match field {
            DemographicField::Gender => &mut self.gender,
            DemographicField::Age => &mut self.age,
            DemographicField::Income => &mut self.income,
            DemographicField::Activity => &mut self.activity,
            DemographicField::Marital => &mut self.marital,
            DemographicField::Education => &mut self.education,
            DemographicField::Region => &mut self.region,
            DemographicField::Experience => &mut self.experience,
        }
    }
}
