//! Shared string and numeric constants.

/// `OpenAPI` tag for platform endpoints (health, docs).
pub const SYSTEM_TAG: &str = "System";

/// `OpenAPI` tag for pack-size and allocation endpoints.
pub const PACKING_TAG: &str = "Packing";

/// Pack sizes every fresh registry starts with.
pub const DEFAULT_PACK_SIZES: [u32; 5] = [250, 500, 1000, 2000, 5000];

/// Query parameter carrying the requested item count.
pub const ITEM_COUNT_PARAM: &str = "itemCount";
