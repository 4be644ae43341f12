//! Naming conventions and helpers for modeldoc model definitions.
//!
//! This crate derives the names a model file may leave out: foreign key
//! attribute names, default table names and default display names. It has no
//! dependencies and can be used by any other modeldoc crate.

// ============================================================================
// Field Naming
// ============================================================================

/// Suffix appended to a foreign key field to form its column attribute.
pub const FK_ATTNAME_SUFFIX: &str = "_id";

/// Build the column attribute name of a foreign key field.
///
/// # Examples
/// ```
/// use modeldoc_naming::build_fk_attname;
///
/// assert_eq!(build_fk_attname("author"), "author_id");
/// assert_eq!(build_fk_attname("created_by"), "created_by_id");
/// ```
pub fn build_fk_attname(field_name: &str) -> String {
    format!("{}{}", field_name, FK_ATTNAME_SUFFIX)
}

/// Default display label for a field: underscores become spaces.
///
/// # Examples
/// ```
/// use modeldoc_naming::field_verbose_name;
///
/// assert_eq!(field_verbose_name("created_at"), "created at");
/// assert_eq!(field_verbose_name("id"), "id");
/// ```
pub fn field_verbose_name(field_name: &str) -> String {
    field_name.replace('_', " ")
}

// ============================================================================
// Model Naming
// ============================================================================

/// Default table name for a model: `{app}_{model}` with the model name lowercased.
///
/// # Examples
/// ```
/// use modeldoc_naming::build_table_name;
///
/// assert_eq!(build_table_name("blog", "Post"), "blog_post");
/// assert_eq!(build_table_name("shop", "OrderItem"), "shop_orderitem");
/// ```
pub fn build_table_name(app: &str, model_name: &str) -> String {
    format!("{}_{}", app, model_name.to_lowercase())
}

/// Default display name for a model: the class name split on case
/// boundaries and lowercased.
///
/// An uppercase letter starts a new word when it follows a lowercase letter,
/// or when it is followed by a lowercase letter (so acronyms stay together).
///
/// # Examples
/// ```
/// use modeldoc_naming::model_verbose_name;
///
/// assert_eq!(model_verbose_name("Post"), "post");
/// assert_eq!(model_verbose_name("BlogPost"), "blog post");
/// assert_eq!(model_verbose_name("HTTPLog"), "http log");
/// ```
pub fn model_verbose_name(model_name: &str) -> String {
    let chars: Vec<char> = model_name.chars().collect();
    let mut out = String::with_capacity(model_name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev_lower = chars[i - 1].is_lowercase();
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev_lower || next_lower {
                out.push(' ');
            }
        }
        out.extend(c.to_lowercase());
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fk_attname() {
        assert_eq!(build_fk_attname("user"), "user_id");
        assert_eq!(build_fk_attname("parent"), "parent_id");
        assert!(build_fk_attname("owner").ends_with(FK_ATTNAME_SUFFIX));
    }

    #[test]
    fn test_field_verbose_name_keeps_non_ascii() {
        assert_eq!(field_verbose_name("标题"), "标题");
        assert_eq!(field_verbose_name("help__text"), "help  text");
    }

    #[test]
    fn test_build_table_name_lowercases_model_only() {
        assert_eq!(build_table_name("Blog", "Post"), "Blog_post");
        assert_eq!(build_table_name("auth", "User"), "auth_user");
    }

    #[test]
    fn test_model_verbose_name_edge_cases() {
        assert_eq!(model_verbose_name(""), "");
        assert_eq!(model_verbose_name("already lower"), "already lower");
        assert_eq!(model_verbose_name("ID"), "id");
        assert_eq!(model_verbose_name("UserMediaRole"), "user media role");
        assert_eq!(model_verbose_name("APIKeyV2"), "api key v2");
    }
}
