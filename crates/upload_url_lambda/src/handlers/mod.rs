pub mod upload_url;
