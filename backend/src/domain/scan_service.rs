//! Simulated bill-scan service.
//!
//! Uploads are validated (content type, size) before anything else runs;
//! a rejected upload never reaches the calculator. The scan itself is a
//! stub: after a fixed delay it returns plausible random bill values. A
//! real implementation would call an external OCR API behind the same
//! contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::Rng;
use shared::{ScanBillRequest, ScanBillResponse, ScanConfig};
use thiserror::Error;
use tracing::{info, warn};

/// Upload rejection reasons. These are blocking, user-facing errors; the
/// calculator core is never invoked for a rejected upload.
#[derive(Debug, Error, PartialEq)]
pub enum ScanError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("File is too large: {size_bytes} bytes (maximum {max_bytes})")]
    FileTooLarge { size_bytes: u64, max_bytes: u64 },
    #[error("A scan is already in progress")]
    ScanInProgress,
}

/// Bill-scan stub with an in-flight guard so a second upload cannot
/// silently restart a running scan.
pub struct ScanService {
    config: ScanConfig,
    busy: AtomicBool,
}

impl ScanService {
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self {
            config,
            busy: AtomicBool::new(false),
        }
    }

    /// Check an upload against the content-type whitelist and size cap.
    pub fn validate_upload(&self, request: &ScanBillRequest) -> Result<(), ScanError> {
        if !self
            .config
            .allowed_content_types
            .iter()
            .any(|t| t == &request.content_type)
        {
            return Err(ScanError::UnsupportedFileType(request.content_type.clone()));
        }
        if request.size_bytes > self.config.max_size_bytes {
            return Err(ScanError::FileTooLarge {
                size_bytes: request.size_bytes,
                max_bytes: self.config.max_size_bytes,
            });
        }
        Ok(())
    }

    /// Validate and "scan" an uploaded bill. Takes the configured delay and
    /// returns mocked values; rejects overlapping scans.
    pub async fn scan_bill(&self, request: ScanBillRequest) -> Result<ScanBillResponse, ScanError> {
        self.validate_upload(&request)?;

        if self.busy.swap(true, Ordering::SeqCst) {
            warn!("rejected upload {} while a scan is running", request.filename);
            return Err(ScanError::ScanInProgress);
        }

        info!(
            "scanning uploaded bill {} ({}, {} bytes)",
            request.filename, request.content_type, request.size_bytes
        );
        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        let result = mock_scan();
        self.busy.store(false, Ordering::SeqCst);

        info!(
            "scan of {} complete: subtotal={:.2} tax={}% tip={}%",
            request.filename, result.subtotal, result.tax_percent, result.tip_percent
        );
        Ok(result)
    }
}

impl Default for ScanService {
    fn default() -> Self {
        Self::new()
    }
}

/// Plausible stand-in values for a scanned bill.
fn mock_scan() -> ScanBillResponse {
    const TAX_PRESETS: [f64; 4] = [0.0, 5.0, 8.875, 10.0];
    const TIP_PRESETS: [f64; 4] = [10.0, 15.0, 18.0, 20.0];

    let mut rng = rand::thread_rng();
    let subtotal = (rng.gen_range(8.0..180.0f64) * 100.0).round() / 100.0;
    ScanBillResponse {
        subtotal,
        tax_percent: TAX_PRESETS[rng.gen_range(0..TAX_PRESETS.len())],
        tip_percent: TIP_PRESETS[rng.gen_range(0..TIP_PRESETS.len())],
    }
}
