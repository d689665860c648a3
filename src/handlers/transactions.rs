use crate::schemas::{AppState, DeleteResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDateTime;
use model::entities::transaction;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, trace};
use utoipa::ToSchema;

/// Request body for creating a transaction.
/// `type`, `status` and the sign of `amount` are free-form; nothing here
/// touches the owning user's balance.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// Owner of the ledger entry
    pub user_id: i32,
    /// "deposit" or "withdrawal" by convention
    #[serde(rename = "type")]
    pub kind: String,
    /// Transaction amount, any sign
    pub amount: Decimal,
    /// Lifecycle marker, typically "pending" or "completed"
    pub status: String,
}

/// Request body for updating a transaction.
/// Only `status` is applied; the remaining fields are accepted and echoed
/// back but never written.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateTransactionRequest {
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub status: String,
}

/// Transaction response model.
/// `created_at` is only populated when reading stored rows; create and
/// update echoes omit it.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransactionResponse {
    pub id: i32,
    pub user_id: i32,
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: Decimal,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl From<transaction::Model> for TransactionResponse {
    fn from(model: transaction::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            kind: model.kind,
            amount: model.amount,
            status: model.status,
            created_at: Some(model.created_at),
        }
    }
}

/// Get all transactions
#[utoipa::path(
    get,
    path = "/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "Transactions retrieved successfully", body = Vec<TransactionResponse>),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn get_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, StatusCode> {
    trace!("Entering get_transactions function");
    debug!("Fetching all transactions from database");

    match transaction::Entity::find().all(&state.db).await {
        Ok(transactions) => {
            let transaction_count = transactions.len();
            debug!("Retrieved {} transactions from database", transaction_count);

            let transaction_responses: Vec<TransactionResponse> = transactions
                .into_iter()
                .map(TransactionResponse::from)
                .collect();

            info!("Successfully retrieved {} transactions", transaction_count);
            Ok(Json(transaction_responses))
        }
        Err(db_error) => {
            error!("Failed to retrieve transactions from database: {}", db_error);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Create a new transaction.
/// The store stamps `created_at`; the response echoes the stored row
/// without it.
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction created successfully", body = TransactionResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), StatusCode> {
    trace!("Entering create_transaction function");
    debug!(
        "Creating transaction for user_id: {}, type: {}, amount: {}",
        request.user_id, request.kind, request.amount
    );

    let new_transaction = transaction::ActiveModel {
        user_id: Set(request.user_id),
        kind: Set(request.kind.clone()),
        amount: Set(request.amount),
        status: Set(request.status.clone()),
        ..Default::default()
    };

    trace!("Attempting to insert new transaction into database");
    match new_transaction.insert(&state.db).await {
        Ok(transaction_model) => {
            info!(
                "Transaction created successfully with ID: {}, type: {}, amount: {}",
                transaction_model.id, transaction_model.kind, transaction_model.amount
            );
            let response = TransactionResponse {
                created_at: None,
                ..TransactionResponse::from(transaction_model)
            };
            Ok((StatusCode::CREATED, Json(response)))
        }
        Err(db_error) => {
            error!(
                "Failed to create transaction for user {}: {}",
                request.user_id, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Update a transaction's status.
/// No existence check: an unknown id affects zero rows and still reports
/// success. The response reflects the request body, not stored state.
#[utoipa::path(
    put,
    path = "/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Transaction status updated", body = TransactionResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn update_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
    Json(request): Json<UpdateTransactionRequest>,
) -> Result<Json<TransactionResponse>, StatusCode> {
    trace!(
        "Entering update_transaction function for transaction_id: {}",
        transaction_id
    );
    debug!(
        "Setting status of transaction {} to '{}'",
        transaction_id, request.status
    );

    match transaction::Entity::update_many()
        .col_expr(
            transaction::Column::Status,
            Expr::value(request.status.clone()),
        )
        .filter(transaction::Column::Id.eq(transaction_id))
        .exec(&state.db)
        .await
    {
        Ok(update_result) => {
            if update_result.rows_affected == 0 {
                debug!("Update for transaction {} matched no rows", transaction_id);
            }
            info!("Transaction {} status update applied", transaction_id);
            Ok(Json(TransactionResponse {
                id: transaction_id,
                user_id: request.user_id,
                kind: request.kind,
                amount: request.amount,
                status: request.status,
                created_at: None,
            }))
        }
        Err(db_error) => {
            error!(
                "Failed to update transaction with ID {}: {}",
                transaction_id, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Delete a transaction
#[utoipa::path(
    delete,
    path = "/transactions/{transaction_id}",
    tag = "transactions",
    params(
        ("transaction_id" = i32, Path, description = "Transaction ID"),
    ),
    responses(
        (status = 200, description = "Delete acknowledged", body = DeleteResponse),
        (status = 500, description = "Internal server error")
    )
)]
#[instrument]
pub async fn delete_transaction(
    Path(transaction_id): Path<i32>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, StatusCode> {
    trace!(
        "Entering delete_transaction function for transaction_id: {}",
        transaction_id
    );
    debug!("Attempting to delete transaction with ID: {}", transaction_id);

    match transaction::Entity::delete_by_id(transaction_id)
        .exec(&state.db)
        .await
    {
        Ok(delete_result) => {
            debug!(
                "Delete operation completed. Rows affected: {}",
                delete_result.rows_affected
            );
            info!("Transaction {} delete acknowledged", transaction_id);
            Ok(Json(DeleteResponse { ok: true }))
        }
        Err(db_error) => {
            error!(
                "Failed to delete transaction with ID {}: {}",
                transaction_id, db_error
            );
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
