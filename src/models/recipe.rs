/// A recipe as handed to the store by the loader. `nutrients` is already
/// serialized JSON text; the store never looks inside it.
#[derive(Debug, Clone)]
pub struct RecipeRecord {
    pub source_key: String,
    pub cuisine: Option<String>,
    pub title: Option<String>,
    pub rating: Option<f64>,
    pub prep_time: Option<i32>,
    pub cook_time: Option<i32>,
    pub total_time: Option<i32>,
    pub description: Option<String>,
    pub nutrients: Option<String>,
    pub serves: Option<String>,
}

/// Closed set of columns the listing endpoint can sort by. Sort tokens from
/// requests resolve to one of these or fall back to the configured default;
/// raw request text never reaches query construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Cuisine,
    Title,
    Rating,
    PrepTime,
    CookTime,
    TotalTime,
    Description,
    Nutrients,
    Serves,
}

impl SortKey {
    pub const ALL: [Self; 9] = [
        Self::Cuisine,
        Self::Title,
        Self::Rating,
        Self::PrepTime,
        Self::CookTime,
        Self::TotalTime,
        Self::Description,
        Self::Nutrients,
        Self::Serves,
    ];

    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "cuisine" => Some(Self::Cuisine),
            "title" => Some(Self::Title),
            "rating" => Some(Self::Rating),
            "prep_time" => Some(Self::PrepTime),
            "cook_time" => Some(Self::CookTime),
            "total_time" => Some(Self::TotalTime),
            "description" => Some(Self::Description),
            "nutrients" => Some(Self::Nutrients),
            "serves" => Some(Self::Serves),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cuisine => "cuisine",
            Self::Title => "title",
            Self::Rating => "rating",
            Self::PrepTime => "prep_time",
            Self::CookTime => "cook_time",
            Self::TotalTime => "total_time",
            Self::Description => "description",
            Self::Nutrients => "nutrients",
            Self::Serves => "serves",
        }
    }
}

/// Requested sort direction. Anything that is not a case-insensitive "desc"
/// normalizes to ascending, including absent and garbage values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

/// Listing behavior resolved once from configuration at startup: the default
/// sort column, the recognized sort columns, and whether nulls sort last.
#[derive(Debug, Clone)]
pub struct ListingPolicy {
    pub default_sort: SortKey,
    pub recognized: Vec<SortKey>,
    pub nulls_last: bool,
}

impl ListingPolicy {
    /// Resolve a raw `sort_by` token to a sort key. Unknown tokens and tokens
    /// outside the recognized set silently fall back to the default.
    #[must_use]
    pub fn resolve_sort(&self, token: Option<&str>) -> SortKey {
        token
            .and_then(SortKey::parse)
            .filter(|key| self.recognized.contains(key))
            .unwrap_or(self.default_sort)
    }
}

/// Conjunctive search criteria; `None` fields add no predicate.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub min_rating: Option<f64>,
    pub max_prep_time: Option<i32>,
}
