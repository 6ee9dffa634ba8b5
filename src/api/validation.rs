use super::ApiError;

pub fn validate_page(page: u64) -> Result<u64, ApiError> {
    if page < 1 {
        return Err(ApiError::validation(format!(
            "Invalid page: {}. Page must be a positive integer",
            page
        )));
    }
    Ok(page)
}

pub fn validate_per_page(per_page: u64) -> Result<u64, ApiError> {
    const MAX_PER_PAGE: u64 = 100;
    const MIN_PER_PAGE: u64 = 1;

    if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&per_page) {
        return Err(ApiError::validation(format!(
            "Invalid per_page: {}. per_page must be between {} and {}",
            per_page, MIN_PER_PAGE, MAX_PER_PAGE
        )));
    }
    Ok(per_page)
}
