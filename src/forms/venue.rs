use super::{checkbox, link, optional, phone, required, Issues, ValidationError};
use crate::directory_store::VenueDraft;
use serde::Deserialize;

/// Fields of the venue create/edit form, as submitted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_talent: String,
    pub seeking_description: String,
}

impl VenueForm {
    pub fn validate(&self) -> Result<VenueDraft, ValidationError> {
        let mut issues = Issues::default();
        let draft = VenueDraft {
            name: required(&self.name, "name", &mut issues),
            city: required(&self.city, "city", &mut issues),
            state: required(&self.state, "state", &mut issues),
            address: required(&self.address, "address", &mut issues),
            phone: phone(&self.phone, &mut issues),
            genres: optional(&self.genres, "genres", &mut issues),
            image_link: link(&self.image_link, "image link", &mut issues),
            website_link: link(&self.website_link, "website link", &mut issues),
            facebook_link: link(&self.facebook_link, "facebook link", &mut issues),
            seeking_talent: checkbox(&self.seeking_talent),
            seeking_description: optional(&self.seeking_description, "seeking description", &mut issues),
        };
        issues.into_result(draft)
    }

    /// Prefills the edit form from a stored venue.
    pub fn from_venue(venue: &crate::directory_store::Venue) -> Self {
        VenueForm {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone(),
            website_link: venue.website_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            seeking_talent: if venue.seeking_talent { "y".to_owned() } else { String::new() },
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> VenueForm {
        VenueForm {
            name: "The Musical Hop".to_owned(),
            city: "San Francisco".to_owned(),
            state: "CA".to_owned(),
            address: "1015 Folsom Street".to_owned(),
            phone: "123-123-1234".to_owned(),
            genres: "Jazz,Reggae,Swing".to_owned(),
            seeking_talent: "y".to_owned(),
            seeking_description: "We are on the lookout for a local artist.".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn complete_form_yields_draft() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.name, "The Musical Hop");
        assert!(draft.seeking_talent);
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let form = VenueForm {
            name: String::new(),
            ..filled_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.messages, vec!["name is required"]);
    }

    #[test]
    fn all_problems_are_reported_at_once() {
        let form = VenueForm {
            name: String::new(),
            city: "  ".to_owned(),
            phone: "not a phone".to_owned(),
            ..filled_form()
        };
        let err = form.validate().unwrap_err();
        assert_eq!(err.messages.len(), 3);
    }

    #[test]
    fn unticked_checkbox_means_not_seeking() {
        let form = VenueForm {
            seeking_talent: String::new(),
            ..filled_form()
        };
        assert!(!form.validate().unwrap().seeking_talent);
    }

    #[test]
    fn prefill_round_trips_through_validate() {
        let draft = filled_form().validate().unwrap();
        let venue = draft.clone().into_venue(3);
        let reparsed = VenueForm::from_venue(&venue).validate().unwrap();
        assert_eq!(reparsed, draft);
    }
}
