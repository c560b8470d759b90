use super::{entity_id, Issues, ValidationError};
use crate::directory_store::ShowDraft;
use crate::showtime;
use serde::Deserialize;

/// Fields of the show creation form, as submitted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(&self) -> Result<ShowDraft, ValidationError> {
        let mut issues = Issues::default();
        let artist_id = entity_id(&self.artist_id, "artist_id", &mut issues);
        let venue_id = entity_id(&self.venue_id, "venue_id", &mut issues);
        let start_time = match showtime::parse_start_time(self.start_time.trim()) {
            Ok(t) => t,
            Err(_) => {
                issues.push(format!(
                    "start_time '{}' is not a valid date-time (expected {})",
                    self.start_time,
                    showtime::STORAGE_FORMAT
                ));
                chrono::NaiveDateTime::MIN
            }
        };
        issues.into_result(ShowDraft {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ShowForm {
        ShowForm {
            artist_id: "1".to_owned(),
            venue_id: "2".to_owned(),
            start_time: "2035-04-01 20:00:00".to_owned(),
        }
    }

    #[test]
    fn complete_form_yields_draft() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.artist_id, 1);
        assert_eq!(draft.venue_id, 2);
        assert_eq!(showtime::format_start_time(draft.start_time), "2035-04-01 20:00:00");
    }

    #[test]
    fn datetime_local_input_is_accepted() {
        let form = ShowForm {
            start_time: "2035-04-01T20:00".to_owned(),
            ..filled_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn unparseable_start_time_is_rejected() {
        let form = ShowForm {
            start_time: "next friday".to_owned(),
            ..filled_form()
        };
        let err = form.validate().unwrap_err();
        assert!(err.messages[0].contains("start_time"));
    }

    #[test]
    fn non_numeric_ids_are_rejected() {
        let form = ShowForm {
            artist_id: "the band".to_owned(),
            venue_id: "-3".to_owned(),
            ..filled_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.messages.len(), 2);
    }
}
