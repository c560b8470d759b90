use super::{link, optional, phone, required, Issues, ValidationError};
use crate::directory_store::ArtistDraft;
use serde::Deserialize;

/// Fields of the artist create/edit form, as submitted.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub website_link: String,
    pub facebook_link: String,
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistDraft, ValidationError> {
        let mut issues = Issues::default();
        let draft = ArtistDraft {
            name: required(&self.name, "name", &mut issues),
            city: required(&self.city, "city", &mut issues),
            state: required(&self.state, "state", &mut issues),
            phone: phone(&self.phone, &mut issues),
            genres: optional(&self.genres, "genres", &mut issues),
            image_link: link(&self.image_link, "image link", &mut issues),
            website_link: link(&self.website_link, "website link", &mut issues),
            facebook_link: link(&self.facebook_link, "facebook link", &mut issues),
            seeking_description: optional(&self.seeking_description, "seeking description", &mut issues),
        };
        issues.into_result(draft)
    }

    pub fn from_artist(artist: &crate::directory_store::Artist) -> Self {
        ArtistForm {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            website_link: artist.website_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            seeking_description: artist.seeking_description.clone(),
        }
    }
}
