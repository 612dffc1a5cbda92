//! Endpoint handlers.
//!
//! Each handler takes its decoded path captures, calls into `calc`, and
//! wraps the value in a single-key JSON object.

use axum::{
    extract::State,
    Json,
};
use serde::Serialize;

use crate::calc::{arithmetic, calendar, text};
use crate::http::error::ApiResult;
use crate::http::extract::LossyPath;
use crate::http::server::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Go Gin application!";

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DateBody {
    pub date: String,
}

#[derive(Debug, Serialize)]
pub struct ResultBody<T> {
    pub result: T,
}

#[derive(Debug, Serialize)]
pub struct PalindromeBody {
    pub is_palindrome: bool,
}

#[derive(Debug, Serialize)]
pub struct DaysUntilNewYearBody {
    pub days_until_new_year: i64,
}

pub async fn welcome() -> Json<MessageBody> {
    Json(MessageBody {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn current_date(State(state): State<AppState>) -> Json<DateBody> {
    Json(DateBody {
        date: calendar::format_date(state.clock.now()),
    })
}

pub async fn add(LossyPath([a, b]): LossyPath<2>) -> ApiResult<Json<ResultBody<i64>>> {
    let result = arithmetic::add(arithmetic::parse_int(&a)?, arithmetic::parse_int(&b)?)?;
    Ok(Json(ResultBody { result }))
}

pub async fn subtract(LossyPath([a, b]): LossyPath<2>) -> ApiResult<Json<ResultBody<i64>>> {
    let result = arithmetic::subtract(arithmetic::parse_int(&a)?, arithmetic::parse_int(&b)?)?;
    Ok(Json(ResultBody { result }))
}

pub async fn multiply(LossyPath([a, b]): LossyPath<2>) -> ApiResult<Json<ResultBody<i64>>> {
    let result = arithmetic::multiply(arithmetic::parse_int(&a)?, arithmetic::parse_int(&b)?)?;
    Ok(Json(ResultBody { result }))
}

pub async fn divide(LossyPath([a, b]): LossyPath<2>) -> ApiResult<Json<ResultBody<f64>>> {
    let result = arithmetic::divide(arithmetic::parse_int(&a)?, arithmetic::parse_int(&b)?)?;
    Ok(Json(ResultBody { result }))
}

pub async fn square(LossyPath([n]): LossyPath<1>) -> ApiResult<Json<ResultBody<i64>>> {
    let result = arithmetic::square(arithmetic::parse_int(&n)?)?;
    Ok(Json(ResultBody { result }))
}

pub async fn sqrt(LossyPath([n]): LossyPath<1>) -> ApiResult<Json<ResultBody<f64>>> {
    let result = arithmetic::sqrt(arithmetic::parse_float(&n)?)?;
    Ok(Json(ResultBody { result }))
}

pub async fn is_palindrome(LossyPath([input]): LossyPath<1>) -> Json<PalindromeBody> {
    Json(PalindromeBody {
        is_palindrome: text::is_palindrome(&input),
    })
}

pub async fn days_until_new_year(
    State(state): State<AppState>,
) -> ApiResult<Json<DaysUntilNewYearBody>> {
    let days_until_new_year = calendar::days_until_new_year(state.clock.now())?;
    Ok(Json(DaysUntilNewYearBody { days_until_new_year }))
}

pub async fn echo(LossyPath([message]): LossyPath<1>) -> Json<MessageBody> {
    Json(MessageBody { message })
}
