//! Engine bit flags passed through the `flags` argument of the engine calls.
//!
//! Values are the engine's own; the client never interprets them.

// Export selection
pub const G2_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES: i64 = 1 << 0;
pub const G2_EXPORT_INCLUDE_POSSIBLY_SAME: i64 = 1 << 1;
pub const G2_EXPORT_INCLUDE_POSSIBLY_RELATED: i64 = 1 << 2;
pub const G2_EXPORT_INCLUDE_NAME_ONLY: i64 = 1 << 3;
pub const G2_EXPORT_INCLUDE_DISCLOSED: i64 = 1 << 4;
pub const G2_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES: i64 = 1 << 5;
pub const G2_EXPORT_INCLUDE_ALL_ENTITIES: i64 =
    G2_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES | G2_EXPORT_INCLUDE_SINGLE_RECORD_ENTITIES;
pub const G2_EXPORT_INCLUDE_ALL_HAVING_RELATIONSHIPS: i64 = G2_EXPORT_INCLUDE_POSSIBLY_SAME
    | G2_EXPORT_INCLUDE_POSSIBLY_RELATED
    | G2_EXPORT_INCLUDE_NAME_ONLY
    | G2_EXPORT_INCLUDE_DISCLOSED;

// Relations
pub const G2_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS: i64 = 1 << 6;
pub const G2_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS: i64 = 1 << 7;
pub const G2_ENTITY_INCLUDE_NAME_ONLY_RELATIONS: i64 = 1 << 8;
pub const G2_ENTITY_INCLUDE_DISCLOSED_RELATIONS: i64 = 1 << 9;
pub const G2_ENTITY_INCLUDE_ALL_RELATIONS: i64 = G2_ENTITY_INCLUDE_POSSIBLY_SAME_RELATIONS
    | G2_ENTITY_INCLUDE_POSSIBLY_RELATED_RELATIONS
    | G2_ENTITY_INCLUDE_NAME_ONLY_RELATIONS
    | G2_ENTITY_INCLUDE_DISCLOSED_RELATIONS;

// Entity and record content
pub const G2_ENTITY_INCLUDE_ALL_FEATURES: i64 = 1 << 10;
pub const G2_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES: i64 = 1 << 11;
pub const G2_ENTITY_INCLUDE_ENTITY_NAME: i64 = 1 << 12;
pub const G2_ENTITY_INCLUDE_RECORD_SUMMARY: i64 = 1 << 13;
pub const G2_ENTITY_INCLUDE_RECORD_DATA: i64 = 1 << 14;
pub const G2_ENTITY_INCLUDE_RECORD_MATCHING_INFO: i64 = 1 << 15;
pub const G2_ENTITY_INCLUDE_RECORD_JSON_DATA: i64 = 1 << 16;
pub const G2_ENTITY_INCLUDE_RECORD_FORMATTED_DATA: i64 = 1 << 17;
pub const G2_ENTITY_INCLUDE_RECORD_FEATURE_IDS: i64 = 1 << 18;
pub const G2_ENTITY_INCLUDE_RELATED_ENTITY_NAME: i64 = 1 << 19;
pub const G2_ENTITY_INCLUDE_RELATED_MATCHING_INFO: i64 = 1 << 20;
pub const G2_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY: i64 = 1 << 21;
pub const G2_ENTITY_INCLUDE_RELATED_RECORD_DATA: i64 = 1 << 22;
pub const G2_ENTITY_OPTION_INCLUDE_INTERNAL_FEATURES: i64 = 1 << 23;
pub const G2_ENTITY_OPTION_INCLUDE_FEATURE_STATS: i64 = 1 << 24;

pub const G2_FIND_PATH_PREFER_EXCLUDE: i64 = 1 << 25;
pub const G2_INCLUDE_FEATURE_SCORES: i64 = 1 << 26;
pub const G2_SEARCH_INCLUDE_STATS: i64 = 1 << 27;

// Search result selection shares bits with export selection.
pub const G2_SEARCH_INCLUDE_RESOLVED: i64 = G2_EXPORT_INCLUDE_MULTI_RECORD_ENTITIES;
pub const G2_SEARCH_INCLUDE_POSSIBLY_SAME: i64 = G2_EXPORT_INCLUDE_POSSIBLY_SAME;
pub const G2_SEARCH_INCLUDE_POSSIBLY_RELATED: i64 = G2_EXPORT_INCLUDE_POSSIBLY_RELATED;
pub const G2_SEARCH_INCLUDE_NAME_ONLY: i64 = G2_EXPORT_INCLUDE_NAME_ONLY;
pub const G2_SEARCH_INCLUDE_ALL_ENTITIES: i64 = G2_SEARCH_INCLUDE_RESOLVED
    | G2_SEARCH_INCLUDE_POSSIBLY_SAME
    | G2_SEARCH_INCLUDE_POSSIBLY_RELATED
    | G2_SEARCH_INCLUDE_NAME_ONLY;

// Defaults
pub const G2_RECORD_DEFAULT_FLAGS: i64 = G2_ENTITY_INCLUDE_RECORD_JSON_DATA;

pub const G2_ENTITY_DEFAULT_FLAGS: i64 = G2_ENTITY_INCLUDE_ALL_RELATIONS
    | G2_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES
    | G2_ENTITY_INCLUDE_ENTITY_NAME
    | G2_ENTITY_INCLUDE_RECORD_SUMMARY
    | G2_ENTITY_INCLUDE_RECORD_DATA
    | G2_ENTITY_INCLUDE_RECORD_MATCHING_INFO
    | G2_ENTITY_INCLUDE_RELATED_ENTITY_NAME
    | G2_ENTITY_INCLUDE_RELATED_RECORD_SUMMARY
    | G2_ENTITY_INCLUDE_RELATED_MATCHING_INFO;

pub const G2_ENTITY_BRIEF_DEFAULT_FLAGS: i64 = G2_ENTITY_INCLUDE_RECORD_MATCHING_INFO
    | G2_ENTITY_INCLUDE_ALL_RELATIONS
    | G2_ENTITY_INCLUDE_RELATED_MATCHING_INFO;

pub const G2_EXPORT_DEFAULT_FLAGS: i64 = G2_EXPORT_INCLUDE_ALL_ENTITIES | G2_ENTITY_DEFAULT_FLAGS;

pub const G2_FIND_PATH_DEFAULT_FLAGS: i64 = G2_ENTITY_INCLUDE_ALL_RELATIONS
    | G2_ENTITY_INCLUDE_ENTITY_NAME
    | G2_ENTITY_INCLUDE_RECORD_SUMMARY
    | G2_ENTITY_INCLUDE_RELATED_MATCHING_INFO;

pub const G2_FIND_NETWORK_DEFAULT_FLAGS: i64 = G2_FIND_PATH_DEFAULT_FLAGS;

pub const G2_WHY_ENTITY_DEFAULT_FLAGS: i64 = G2_ENTITY_DEFAULT_FLAGS
    | G2_ENTITY_OPTION_INCLUDE_INTERNAL_FEATURES
    | G2_ENTITY_OPTION_INCLUDE_FEATURE_STATS
    | G2_INCLUDE_FEATURE_SCORES;

pub const G2_HOW_ENTITY_DEFAULT_FLAGS: i64 = G2_INCLUDE_FEATURE_SCORES;

pub const G2_VIRTUAL_ENTITY_DEFAULT_FLAGS: i64 = G2_ENTITY_DEFAULT_FLAGS;

pub const G2_SEARCH_BY_ATTRIBUTES_ALL: i64 = G2_SEARCH_INCLUDE_ALL_ENTITIES
    | G2_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES
    | G2_ENTITY_INCLUDE_ENTITY_NAME
    | G2_ENTITY_INCLUDE_RECORD_SUMMARY
    | G2_INCLUDE_FEATURE_SCORES;

pub const G2_SEARCH_BY_ATTRIBUTES_STRONG: i64 = G2_SEARCH_INCLUDE_RESOLVED
    | G2_SEARCH_INCLUDE_POSSIBLY_SAME
    | G2_ENTITY_INCLUDE_REPRESENTATIVE_FEATURES
    | G2_ENTITY_INCLUDE_ENTITY_NAME
    | G2_ENTITY_INCLUDE_RECORD_SUMMARY
    | G2_INCLUDE_FEATURE_SCORES;

pub const G2_SEARCH_BY_ATTRIBUTES_DEFAULT_FLAGS: i64 = G2_SEARCH_BY_ATTRIBUTES_ALL;
