use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{
    BillFields, ComputeSplitRequest, ComputeSplitResponse, GenerateBreakdownRequest,
    GenerateBreakdownResponse, ParticipantFields, ScanBillRequest,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::{
    allocation, BreakdownService, CalculatorState, Participant, ScanError, ScanService,
    SplitOutcome, SplitService,
};

/// Application state containing the calculator services
#[derive(Clone)]
pub struct AppState {
    pub split_service: SplitService,
    pub breakdown_service: BreakdownService,
    pub scan_service: Arc<ScanService>,
}

impl AppState {
    /// Create new application state with the given services
    pub fn new(
        split_service: SplitService,
        breakdown_service: BreakdownService,
        scan_service: ScanService,
    ) -> Self {
        Self {
            split_service,
            breakdown_service,
            scan_service: Arc::new(scan_service),
        }
    }
}

/// Axum handler function for POST /api/split/compute
pub async fn compute_split(
    State(state): State<AppState>,
    Json(request): Json<ComputeSplitRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/split/compute - {} participants, pristine: {}",
        request.participants.len(),
        request.pristine
    );

    let mut calc = to_calculator_state(&request.bill, &request.participants, request.pristine);
    let outcome = state.split_service.compute(&mut calc);
    (StatusCode::OK, Json(to_response(outcome, &calc)))
}

/// Axum handler function for POST /api/split/breakdown
pub async fn generate_breakdown(
    State(state): State<AppState>,
    Json(request): Json<GenerateBreakdownRequest>,
) -> impl IntoResponse {
    info!("POST /api/split/breakdown - itemized: {}", request.itemized);

    let mut calc = to_calculator_state(&request.bill, &request.participants, request.pristine);
    let outcome = state.split_service.compute(&mut calc);

    let breakdown_text = state.breakdown_service.breakdown_text(
        &outcome,
        calc.bill.currency,
        request.itemized,
    );
    let share_url = state.breakdown_service.share_url(&breakdown_text);
    let qr_image_url = state.breakdown_service.qr_image_url(&share_url);

    (
        StatusCode::OK,
        Json(GenerateBreakdownResponse {
            breakdown_text,
            share_url,
            qr_image_url,
        }),
    )
}

/// Axum handler function for POST /api/scan
pub async fn scan_bill(
    State(state): State<AppState>,
    Json(request): Json<ScanBillRequest>,
) -> impl IntoResponse {
    info!(
        "POST /api/scan - file: {} ({}, {} bytes)",
        request.filename, request.content_type, request.size_bytes
    );

    match state.scan_service.scan_bill(request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            warn!("Scan rejected: {}", e);
            let status = match e {
                ScanError::UnsupportedFileType(_) => StatusCode::BAD_REQUEST,
                ScanError::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                ScanError::ScanInProgress => StatusCode::CONFLICT,
            };
            (status, e.to_string()).into_response()
        }
    }
}

fn to_calculator_state(
    bill: &BillFields,
    participants: &[ParticipantFields],
    pristine: bool,
) -> CalculatorState {
    let mut state = CalculatorState::new();
    state.bill = bill.clone();
    state.participants = participants
        .iter()
        .map(|p| Participant {
            name: p.name.clone(),
            mode: p.mode,
            percent_field: p.percent.clone(),
            amount_field: p.amount.clone(),
        })
        .collect();
    state.pristine = pristine;
    state
}

fn to_participant_fields(p: &Participant) -> ParticipantFields {
    ParticipantFields {
        name: p.name.clone(),
        mode: p.mode,
        percent: p.percent_field.clone(),
        amount: p.amount_field.clone(),
    }
}

/// Build the response DTO, echoing back the (possibly back-filled) field
/// state so the client can render it verbatim.
fn to_response(outcome: SplitOutcome, state: &CalculatorState) -> ComputeSplitResponse {
    ComputeSplitResponse {
        subtotal: outcome.subtotal,
        tax_percent: outcome.tax_percent,
        tip_percent: outcome.tip_percent,
        tax_amount: outcome.tax_amount,
        tip_amount: outcome.tip_amount,
        total: outcome.total,
        people: outcome.people,
        per_person: outcome.per_person,
        rounding_adjustment: outcome.rounding_adjustment,
        allocation: outcome.allocation,
        warning_message: outcome
            .warning
            .map(|w| allocation::warning_message(w).to_string()),
        warning: outcome.warning,
        bill: state.bill.clone(),
        participants: state.participants.iter().map(to_participant_fields).collect(),
        pristine: state.pristine,
    }
}
