use payloads::{LocationDetails, RegionId};

use crate::input::NumericInput;

/// The in-progress copy of a location being created or edited.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub site_name: String,
    pub location: String,
    pub time_zone: String,
    pub region_id: NumericInput<i64>,
    pub latitude: NumericInput<f64>,
    pub longitude: NumericInput<f64>,
}

/// Each input of the form maps to exactly one field of the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SiteName,
    Location,
    TimeZone,
    RegionId,
    Latitude,
    Longitude,
}

impl Draft {
    /// Hydrate a draft from a stored record.
    pub fn from_details(details: &LocationDetails) -> Self {
        Self {
            site_name: details.site_name.clone(),
            location: details.location.clone(),
            time_zone: details.time_zone.clone(),
            region_id: NumericInput::from_value(
                details.region_id.map(|id| id.0),
            ),
            latitude: NumericInput::from_value(details.latitude),
            longitude: NumericInput::from_value(details.longitude),
        }
    }

    /// Replace a single field from the raw input text, leaving all other
    /// fields untouched.
    pub fn set(&mut self, field: Field, raw: impl Into<String>) {
        let raw = raw.into();
        match field {
            Field::SiteName => self.site_name = raw,
            Field::Location => self.location = raw,
            Field::TimeZone => self.time_zone = raw,
            Field::RegionId => self.region_id = NumericInput::parse(raw),
            Field::Latitude => self.latitude = NumericInput::parse(raw),
            Field::Longitude => self.longitude = NumericInput::parse(raw),
        }
    }

    /// The text to show in the input for `field`.
    pub fn raw(&self, field: Field) -> &str {
        match field {
            Field::SiteName => &self.site_name,
            Field::Location => &self.location,
            Field::TimeZone => &self.time_zone,
            Field::RegionId => self.region_id.raw(),
            Field::Latitude => self.latitude.raw(),
            Field::Longitude => self.longitude.raw(),
        }
    }

    /// Request body for create and update. Optional fields are `None`
    /// exactly when the input is blank or unparsable.
    pub fn to_details(&self) -> LocationDetails {
        LocationDetails {
            site_name: self.site_name.clone(),
            location: self.location.clone(),
            time_zone: self.time_zone.clone(),
            region_id: self.region_id.value().map(RegionId),
            latitude: self.latitude.value(),
            longitude: self.longitude.value(),
        }
    }
}

/// Time zone names offered as suggestions for the time zone input, sorted.
pub fn time_zone_suggestions() -> Vec<String> {
    let mut names: Vec<String> = jiff::tz::db()
        .available()
        .map(|name| name.to_string())
        .collect();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Draft {
        let mut draft = Draft::default();
        draft.set(Field::SiteName, "HQ");
        draft.set(Field::Location, "Main");
        draft.set(Field::TimeZone, "UTC");
        draft.set(Field::RegionId, "3");
        draft.set(Field::Latitude, "51.5");
        draft.set(Field::Longitude, "-0.12");
        draft
    }

    #[test]
    fn blank_optionals_become_null() {
        let mut draft = Draft::default();
        draft.set(Field::SiteName, "HQ");
        draft.set(Field::Location, "Main");
        draft.set(Field::TimeZone, "UTC");
        draft.set(Field::RegionId, "");
        draft.set(Field::Latitude, "");
        draft.set(Field::Longitude, "");

        assert_eq!(
            draft.to_details(),
            LocationDetails {
                site_name: "HQ".into(),
                location: "Main".into(),
                time_zone: "UTC".into(),
                region_id: None,
                latitude: None,
                longitude: None,
            }
        );
    }

    #[test]
    fn zero_is_not_nulled() {
        let mut draft = filled();
        draft.set(Field::RegionId, "0");
        draft.set(Field::Latitude, "0");
        draft.set(Field::Longitude, "0.0");

        let details = draft.to_details();
        assert_eq!(details.region_id, Some(RegionId(0)));
        assert_eq!(details.latitude, Some(0.0));
        assert_eq!(details.longitude, Some(0.0));
    }

    #[test]
    fn unparsable_numbers_are_never_submitted() {
        let mut draft = filled();
        draft.set(Field::RegionId, "abc");
        draft.set(Field::Latitude, "NaN");
        draft.set(Field::Longitude, "12,5");

        let details = draft.to_details();
        assert_eq!(details.region_id, None);
        assert_eq!(details.latitude, None);
        assert_eq!(details.longitude, None);
        // the typed text is still shown
        assert_eq!(draft.raw(Field::Longitude), "12,5");
    }

    #[test]
    fn setting_one_field_leaves_the_rest_alone() {
        let fields = [
            (Field::SiteName, "Annex"),
            (Field::Location, "Basement"),
            (Field::TimeZone, "Asia/Tokyo"),
            (Field::RegionId, "9"),
            (Field::Latitude, "10"),
            (Field::Longitude, "20"),
        ];
        let all = [
            Field::SiteName,
            Field::Location,
            Field::TimeZone,
            Field::RegionId,
            Field::Latitude,
            Field::Longitude,
        ];

        for (field, value) in fields {
            let before = filled();
            let mut after = before.clone();
            after.set(field, value);

            assert_eq!(after.raw(field), value);
            for other in all.iter().filter(|f| **f != field) {
                assert_eq!(
                    after.raw(*other),
                    before.raw(*other),
                    "{field:?} changed {other:?}"
                );
            }
        }
    }

    #[test]
    fn hydrates_from_details() {
        let details = LocationDetails {
            site_name: "HQ".into(),
            location: "Main".into(),
            time_zone: "Europe/London".into(),
            region_id: Some(RegionId(0)),
            latitude: Some(51.5),
            longitude: None,
        };
        let draft = Draft::from_details(&details);

        assert_eq!(draft.raw(Field::RegionId), "0");
        assert_eq!(draft.raw(Field::Latitude), "51.5");
        assert_eq!(draft.raw(Field::Longitude), "");
        assert_eq!(draft.to_details(), details);
    }

    #[test]
    fn suggestions_include_common_zones() {
        let zones = time_zone_suggestions();
        assert!(zones.iter().any(|z| z == "Europe/London"));
        assert!(zones.windows(2).all(|w| w[0] <= w[1]));
    }
}
