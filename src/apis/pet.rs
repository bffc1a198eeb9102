//! Pet operations.
//!
//! Operations that change pets use the `petstore_auth` scheme (an OAuth
//! bearer token); [`PetApi::get_pet_by_id`] uses the `api_key` scheme.
//! Collection query parameters are sent comma-separated.

use std::sync::Arc;

use crate::apis::params::{csv, decode, encode, path_param, require_non_empty};
use crate::apis::ApiError;
use crate::auth::{AuthInfo, AuthScheme};
use crate::clients::{
    ApiClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse, MultipartField,
    RequestBody,
};
use crate::models::{ApiResponse, Pet, PetStatus};

const PET: &str = "Pet";

/// A file to upload with [`PetApi::upload_file`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    /// File name reported to the server.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates a file upload.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

/// Pet operations.
///
/// As with [`StoreApi`](crate::apis::StoreApi), each operation has a
/// `_with_auth` form whose [`AuthInfo`] replaces the default credentials.
#[allow(async_fn_in_trait)]
pub trait PetApi {
    /// Adds a new pet to the store.
    ///
    /// # Errors
    ///
    /// A 405 maps to [`ApiError::InvalidInput`].
    async fn add_pet(&self, pet: &Pet) -> Result<(), ApiError>;

    /// Adds a new pet using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::add_pet`].
    async fn add_pet_with_auth(&self, pet: &Pet, auth_info: &AuthInfo) -> Result<(), ApiError>;

    /// Updates an existing pet.
    ///
    /// # Errors
    ///
    /// A 404 maps to [`ApiError::NotFound`] when `pet.id` is set; 400 and
    /// 405 map to [`ApiError::InvalidInput`].
    async fn update_pet(&self, pet: &Pet) -> Result<(), ApiError>;

    /// Updates an existing pet using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::update_pet`].
    async fn update_pet_with_auth(&self, pet: &Pet, auth_info: &AuthInfo) -> Result<(), ApiError>;

    /// Deletes a pet. `api_key`, when given, is sent in the `api_key` header.
    ///
    /// # Errors
    ///
    /// A 404 maps to [`ApiError::NotFound`].
    async fn delete_pet(&self, pet_id: i64, api_key: Option<&str>) -> Result<(), ApiError>;

    /// Deletes a pet using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::delete_pet`].
    async fn delete_pet_with_auth(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
        auth_info: &AuthInfo,
    ) -> Result<(), ApiError>;

    /// Finds pets with any of the given statuses.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingRequiredParameter`] if `status` is empty.
    async fn find_pets_by_status(&self, status: &[PetStatus]) -> Result<Vec<Pet>, ApiError>;

    /// Finds pets by status using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::find_pets_by_status`].
    async fn find_pets_by_status_with_auth(
        &self,
        status: &[PetStatus],
        auth_info: &AuthInfo,
    ) -> Result<Vec<Pet>, ApiError>;

    /// Finds pets carrying any of the given tags.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingRequiredParameter`] if `tags` is empty.
    #[deprecated(note = "the service marks findByTags as deprecated; use find_pets_by_status")]
    async fn find_pets_by_tags(&self, tags: &[String]) -> Result<Vec<Pet>, ApiError>;

    /// Finds pets by tags using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::find_pets_by_tags`].
    #[deprecated(note = "the service marks findByTags as deprecated; use find_pets_by_status")]
    async fn find_pets_by_tags_with_auth(
        &self,
        tags: &[String],
        auth_info: &AuthInfo,
    ) -> Result<Vec<Pet>, ApiError>;

    /// Finds a pet by ID.
    ///
    /// # Errors
    ///
    /// A 404 maps to [`ApiError::NotFound`], a 400 to
    /// [`ApiError::InvalidInput`].
    async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiError>;

    /// Finds a pet by ID using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::get_pet_by_id`].
    async fn get_pet_by_id_with_auth(
        &self,
        pet_id: i64,
        auth_info: &AuthInfo,
    ) -> Result<Pet, ApiError>;

    /// Updates a pet's name and/or status with form data.
    ///
    /// # Errors
    ///
    /// A 405 maps to [`ApiError::InvalidInput`].
    async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
    ) -> Result<(), ApiError>;

    /// Updates a pet with form data using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::update_pet_with_form`].
    async fn update_pet_with_form_with_auth(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
        auth_info: &AuthInfo,
    ) -> Result<(), ApiError>;

    /// Uploads an image for a pet.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Deserialization`] if the service's reply is not
    /// an [`ApiResponse`].
    async fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileUpload>,
    ) -> Result<ApiResponse, ApiError>;

    /// Uploads an image for a pet using the given credentials.
    ///
    /// # Errors
    ///
    /// See [`PetApi::upload_file`].
    async fn upload_file_with_auth(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileUpload>,
        auth_info: &AuthInfo,
    ) -> Result<ApiResponse, ApiError>;
}

/// [`PetApi`] over a shared [`ApiClient`].
#[derive(Clone, Debug)]
pub struct PetApiClient {
    client: Arc<ApiClient>,
}

// Verify PetApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PetApiClient>();
};

impl PetApiClient {
    /// Creates a pet client over a shared transport.
    #[must_use]
    pub const fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// Sends a request and classifies any failure for `operation`.
    async fn send(
        &self,
        builder: HttpRequestBuilder,
        auth_info: Option<&AuthInfo>,
        operation: &'static str,
        id: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        let request = builder.build().map_err(HttpError::from)?;
        self.client
            .request(request, auth_info)
            .await
            .map_err(|e| ApiError::from_http_error(e, operation, PET, id))
    }

    async fn add_pet_inner(&self, pet: &Pet, auth_info: Option<&AuthInfo>) -> Result<(), ApiError> {
        let builder = HttpRequest::builder(HttpMethod::Post, "pet")
            .body(RequestBody::Json(encode(pet)?))
            .auth(AuthScheme::PetstoreAuth);
        self.send(builder, auth_info, "add_pet", None).await?;
        tracing::debug!("Added pet {}", pet.name);
        Ok(())
    }

    async fn update_pet_inner(
        &self,
        pet: &Pet,
        auth_info: Option<&AuthInfo>,
    ) -> Result<(), ApiError> {
        let builder = HttpRequest::builder(HttpMethod::Put, "pet")
            .body(RequestBody::Json(encode(pet)?))
            .auth(AuthScheme::PetstoreAuth);
        let id = pet.id.map(|id| id.to_string());
        self.send(builder, auth_info, "update_pet", id.as_deref())
            .await?;
        Ok(())
    }

    async fn delete_pet_inner(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
        auth_info: Option<&AuthInfo>,
    ) -> Result<(), ApiError> {
        let path = format!("pet/{}", path_param(pet_id));
        let mut builder =
            HttpRequest::builder(HttpMethod::Delete, path).auth(AuthScheme::PetstoreAuth);
        if let Some(api_key) = api_key {
            builder = builder.header(AuthScheme::API_KEY_HEADER, api_key);
        }
        let id = pet_id.to_string();
        self.send(builder, auth_info, "delete_pet", Some(&id)).await?;
        tracing::debug!("Deleted pet {}", pet_id);
        Ok(())
    }

    async fn find_pets_by_status_inner(
        &self,
        status: &[PetStatus],
        auth_info: Option<&AuthInfo>,
    ) -> Result<Vec<Pet>, ApiError> {
        const OPERATION: &str = "find_pets_by_status";
        require_non_empty(status, "status", OPERATION)?;

        let builder = HttpRequest::builder(HttpMethod::Get, "pet/findByStatus")
            .query_param("status", csv(status))
            .auth(AuthScheme::PetstoreAuth);
        let response = self.send(builder, auth_info, OPERATION, None).await?;
        decode(response, OPERATION)
    }

    async fn find_pets_by_tags_inner(
        &self,
        tags: &[String],
        auth_info: Option<&AuthInfo>,
    ) -> Result<Vec<Pet>, ApiError> {
        const OPERATION: &str = "find_pets_by_tags";
        require_non_empty(tags, "tags", OPERATION)?;

        tracing::warn!("{} is deprecated by the Petstore API", OPERATION);
        let builder = HttpRequest::builder(HttpMethod::Get, "pet/findByTags")
            .query_param("tags", csv(tags))
            .auth(AuthScheme::PetstoreAuth);
        let response = self.send(builder, auth_info, OPERATION, None).await?;
        decode(response, OPERATION)
    }

    async fn get_pet_by_id_inner(
        &self,
        pet_id: i64,
        auth_info: Option<&AuthInfo>,
    ) -> Result<Pet, ApiError> {
        const OPERATION: &str = "get_pet_by_id";
        let path = format!("pet/{}", path_param(pet_id));
        let builder = HttpRequest::builder(HttpMethod::Get, path).auth(AuthScheme::ApiKey);
        let id = pet_id.to_string();
        let response = self.send(builder, auth_info, OPERATION, Some(&id)).await?;
        decode(response, OPERATION)
    }

    async fn update_pet_with_form_inner(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
        auth_info: Option<&AuthInfo>,
    ) -> Result<(), ApiError> {
        let mut fields = Vec::new();
        if let Some(name) = name {
            fields.push(("name".to_string(), name.to_string()));
        }
        if let Some(status) = status {
            fields.push(("status".to_string(), status.to_string()));
        }

        let path = format!("pet/{}", path_param(pet_id));
        let builder = HttpRequest::builder(HttpMethod::Post, path)
            .body(RequestBody::Form(fields))
            .auth(AuthScheme::PetstoreAuth);
        let id = pet_id.to_string();
        self.send(builder, auth_info, "update_pet_with_form", Some(&id))
            .await?;
        Ok(())
    }

    async fn upload_file_inner(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileUpload>,
        auth_info: Option<&AuthInfo>,
    ) -> Result<ApiResponse, ApiError> {
        const OPERATION: &str = "upload_file";

        let mut fields = Vec::new();
        if let Some(metadata) = additional_metadata {
            fields.push(MultipartField::Text {
                name: "additionalMetadata".to_string(),
                value: metadata.to_string(),
            });
        }
        if let Some(file) = file {
            fields.push(MultipartField::File {
                name: "file".to_string(),
                file_name: file.file_name.clone(),
                bytes: file.bytes.clone(),
            });
        }

        let path = format!("pet/{}/uploadImage", path_param(pet_id));
        let builder = HttpRequest::builder(HttpMethod::Post, path)
            .body(RequestBody::Multipart(fields))
            .auth(AuthScheme::PetstoreAuth);
        let id = pet_id.to_string();
        let response = self.send(builder, auth_info, OPERATION, Some(&id)).await?;
        decode(response, OPERATION)
    }
}

impl PetApi for PetApiClient {
    async fn add_pet(&self, pet: &Pet) -> Result<(), ApiError> {
        self.add_pet_inner(pet, None).await
    }

    async fn add_pet_with_auth(&self, pet: &Pet, auth_info: &AuthInfo) -> Result<(), ApiError> {
        self.add_pet_inner(pet, Some(auth_info)).await
    }

    async fn update_pet(&self, pet: &Pet) -> Result<(), ApiError> {
        self.update_pet_inner(pet, None).await
    }

    async fn update_pet_with_auth(&self, pet: &Pet, auth_info: &AuthInfo) -> Result<(), ApiError> {
        self.update_pet_inner(pet, Some(auth_info)).await
    }

    async fn delete_pet(&self, pet_id: i64, api_key: Option<&str>) -> Result<(), ApiError> {
        self.delete_pet_inner(pet_id, api_key, None).await
    }

    async fn delete_pet_with_auth(
        &self,
        pet_id: i64,
        api_key: Option<&str>,
        auth_info: &AuthInfo,
    ) -> Result<(), ApiError> {
        self.delete_pet_inner(pet_id, api_key, Some(auth_info))
            .await
    }

    async fn find_pets_by_status(&self, status: &[PetStatus]) -> Result<Vec<Pet>, ApiError> {
        self.find_pets_by_status_inner(status, None).await
    }

    async fn find_pets_by_status_with_auth(
        &self,
        status: &[PetStatus],
        auth_info: &AuthInfo,
    ) -> Result<Vec<Pet>, ApiError> {
        self.find_pets_by_status_inner(status, Some(auth_info))
            .await
    }

    async fn find_pets_by_tags(&self, tags: &[String]) -> Result<Vec<Pet>, ApiError> {
        self.find_pets_by_tags_inner(tags, None).await
    }

    async fn find_pets_by_tags_with_auth(
        &self,
        tags: &[String],
        auth_info: &AuthInfo,
    ) -> Result<Vec<Pet>, ApiError> {
        self.find_pets_by_tags_inner(tags, Some(auth_info)).await
    }

    async fn get_pet_by_id(&self, pet_id: i64) -> Result<Pet, ApiError> {
        self.get_pet_by_id_inner(pet_id, None).await
    }

    async fn get_pet_by_id_with_auth(
        &self,
        pet_id: i64,
        auth_info: &AuthInfo,
    ) -> Result<Pet, ApiError> {
        self.get_pet_by_id_inner(pet_id, Some(auth_info)).await
    }

    async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
    ) -> Result<(), ApiError> {
        self.update_pet_with_form_inner(pet_id, name, status, None)
            .await
    }

    async fn update_pet_with_form_with_auth(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<PetStatus>,
        auth_info: &AuthInfo,
    ) -> Result<(), ApiError> {
        self.update_pet_with_form_inner(pet_id, name, status, Some(auth_info))
            .await
    }

    async fn upload_file(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileUpload>,
    ) -> Result<ApiResponse, ApiError> {
        self.upload_file_inner(pet_id, additional_metadata, file, None)
            .await
    }

    async fn upload_file_with_auth(
        &self,
        pet_id: i64,
        additional_metadata: Option<&str>,
        file: Option<&FileUpload>,
        auth_info: &AuthInfo,
    ) -> Result<ApiResponse, ApiError> {
        self.upload_file_inner(pet_id, additional_metadata, file, Some(auth_info))
            .await
    }
}
