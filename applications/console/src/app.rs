use crate::config::ConsoleConfig;
use crate::error::Result;
use std::path::Path;
use taller_client::TallerClient;
use taller_core::PhotoFile;
use taller_dashboard::Dashboard;

/// Build a dashboard talking to the configured backend
pub fn build_dashboard(config: &ConsoleConfig) -> Result<Dashboard<TallerClient>> {
    config.validate()?;

    let client = TallerClient::new(config.client_config())?;
    tracing::info!(url = %client.url(), "Profile backend configured");

    Ok(Dashboard::new(client, config.dashboard_config()))
}

/// Read a photo picked on the command line
pub fn read_photo(path: &Path) -> Result<PhotoFile> {
    let photo = PhotoFile::from_path(path)?;
    tracing::debug!(
        file = %photo.file_name(),
        mime = %photo.mime_type(),
        size = photo.size(),
        "Photo read"
    );
    Ok(photo)
}
