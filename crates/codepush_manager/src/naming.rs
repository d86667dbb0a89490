use codepush_client::models::CodePushOs;

/// Name of the per-OS app registered for `app_base_name`, e.g. `MyApp-ios`.
pub fn app_name_for(app_base_name: &str, os: CodePushOs) -> String {
    format!("{}-{}", app_base_name, os)
}
