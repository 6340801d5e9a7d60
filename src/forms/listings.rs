use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use validator::Validate;

use crate::domain::listing::{ListingStatus, NewListing, UpdateListing};
use crate::forms::FormError;

#[derive(Deserialize, Validate)]
/// Form data for creating a listing from the dashboard.
pub struct AddListingForm {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub address: String,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub phone: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub lng: Option<f64>,
}

impl AddListingForm {
    /// Convert the form into a [`NewListing`] owned by the submitting user.
    pub fn into_new_listing(self, hub_id: i32, owner_email: &str) -> NewListing {
        NewListing::new(
            hub_id,
            owner_email.to_string(),
            self.title,
            self.description,
            self.category,
            self.city,
            self.address,
        )
        .contact(self.phone, self.email)
        .location(self.lat, self.lng)
    }
}

#[derive(Deserialize, Validate)]
/// Form data for updating an existing listing.
pub struct SaveListingForm {
    pub id: i32,
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub city: String,
    pub address: String,
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub phone: Option<String>,
    #[validate(email)]
    #[serde(default, deserialize_with = "crate::forms::de_opt_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "crate::forms::de_opt_f64")]
    pub lng: Option<f64>,
    pub status: String,
}

impl From<&SaveListingForm> for UpdateListing {
    fn from(form: &SaveListingForm) -> Self {
        UpdateListing::new(
            form.title.clone(),
            form.description.clone(),
            form.category.clone(),
            form.city.clone(),
            form.address.clone(),
            form.phone.clone(),
            form.email.clone(),
            form.lat,
            form.lng,
            ListingStatus::from(form.status.as_str()),
        )
    }
}

#[derive(Deserialize)]
/// Form data for deleting a listing.
pub struct DeleteListingForm {
    pub id: i32,
}

#[derive(MultipartForm)]
/// CSV bulk upload of listings.
pub struct UploadListingsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

#[derive(Debug, Deserialize)]
struct ListingCsvRecord {
    title: String,
    description: String,
    category: String,
    city: String,
    address: String,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    email: Option<String>,
}

impl UploadListingsForm {
    /// Parses the uploaded CSV into listings owned by the submitting user.
    /// Expected header: `title,description,category,city,address[,phone,email]`.
    pub fn parse(&mut self, hub_id: i32, owner_email: &str) -> Result<Vec<NewListing>, FormError> {
        let file = self
            .csv
            .file
            .reopen()
            .map_err(|e| FormError::Csv(e.to_string()))?;
        let mut rdr = csv::Reader::from_reader(file);

        let mut listings = Vec::new();
        for result in rdr.deserialize::<ListingCsvRecord>() {
            let record = result.map_err(|e| FormError::Csv(e.to_string()))?;
            listings.push(
                NewListing::new(
                    hub_id,
                    owner_email.to_string(),
                    record.title,
                    record.description,
                    record.category,
                    record.city,
                    record.address,
                )
                .contact(record.phone, record.email),
            );
        }

        Ok(listings)
    }
}
