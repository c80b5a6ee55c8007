//! Handlers driven against a bootstrapped context in a temp directory.

use showcase_cli::commands::{
    CategoryCommand, ProjectArgs, ProjectCommand, SettingField, SettingsArgs, SettingsCommand,
};
use showcase_cli::handlers::demo::DemoArgs;
use showcase_cli::{CliConfig, CliContext, CliError, bootstrap, handlers};

async fn context(dir: &tempfile::TempDir) -> CliContext {
    bootstrap(CliConfig {
        data_dir: Some(dir.path().display().to_string()),
        settings_file: None,
    })
    .await
    .unwrap()
}

fn project_args(title: &str, category: Option<i64>) -> ProjectArgs {
    ProjectArgs {
        title: title.to_string(),
        description: "<p>Case study</p>".to_string(),
        images: vec!["https://cdn.example.com/cover.jpg".to_string()],
        video: Some("https://youtu.be/dQw4w9WgXcQ".to_string()),
        link: "https://example.com".to_string(),
        category,
    }
}

#[tokio::test]
async fn test_project_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    handlers::category::execute(
        &ctx,
        CategoryCommand::Add {
            name: "Web Design".to_string(),
        },
    )
    .await
    .unwrap();
    let category = ctx.core().categories().list().await.unwrap()[0].clone();
    assert_eq!(category.slug, "web-design");

    handlers::project::execute(
        &ctx,
        ProjectCommand::Add(project_args("Atlas", Some(category.id))),
    )
    .await
    .unwrap();
    handlers::project::execute(&ctx, ProjectCommand::List)
        .await
        .unwrap();

    let projects = ctx.core().projects().list().await.unwrap();
    assert_eq!(projects.len(), 1);
    let id = projects[0].id.0;

    handlers::project::execute(
        &ctx,
        ProjectCommand::Edit {
            id,
            project: project_args("Atlas v2", None),
        },
    )
    .await
    .unwrap();
    assert_eq!(
        ctx.core().projects().list().await.unwrap()[0].title,
        "Atlas v2"
    );

    handlers::slides::execute(&ctx, Some("all"), None).await.unwrap();
    handlers::details::execute(&ctx, id, true).await.unwrap();

    handlers::project::execute(&ctx, ProjectCommand::Remove { id, force: true })
        .await
        .unwrap();
    assert!(ctx.core().projects().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_category_is_argument_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    let err = handlers::project::execute(&ctx, ProjectCommand::Add(project_args("Atlas", Some(99))))
        .await
        .unwrap_err();
    let cli_err = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_err.exit_code(), 2);
}

#[tokio::test]
async fn test_missing_details_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    let err = handlers::details::execute(&ctx, 42, false).await.unwrap_err();
    let cli_err = err.downcast_ref::<CliError>().unwrap();
    assert_eq!(cli_err.exit_code(), 66);
}

#[tokio::test]
async fn test_demo_rejects_out_of_range_delay() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    let err = handlers::demo::execute(
        &ctx,
        DemoArgs {
            seconds: 0,
            filter: None,
            delay_ms: Some(10),
        },
    )
    .await
    .unwrap_err();
    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 2);
}

#[tokio::test]
async fn test_demo_runs_on_empty_portfolio() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    handlers::demo::execute(
        &ctx,
        DemoArgs {
            seconds: 0,
            filter: Some("web".to_string()),
            delay_ms: None,
        },
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_settings_set_and_reset() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    handlers::settings::execute(
        &ctx,
        SettingsCommand::Set(SettingsArgs {
            auto_slide_delay_ms: Some(8000),
            layout: Some(showcase_core::Layout::CardStack),
            ..Default::default()
        }),
    )
    .unwrap();
    assert!(ctx.settings_path.exists());
    let saved = ctx.settings_service().get().unwrap();
    assert_eq!(saved.auto_slide_delay_ms, Some(8000));
    assert_eq!(saved.layout, Some(showcase_core::Layout::CardStack));

    handlers::settings::execute(
        &ctx,
        SettingsCommand::Reset {
            fields: vec![SettingField::Layout],
            force: true,
        },
    )
    .unwrap();
    let config = ctx.settings_service().get().unwrap().carousel_config();
    assert_eq!(config.layout, showcase_core::Layout::Coverflow);
    assert_eq!(config.auto_slide_delay.as_millis(), 8000);

    let err = handlers::settings::execute(
        &ctx,
        SettingsCommand::Set(SettingsArgs {
            swipe_threshold_px: Some(0),
            ..Default::default()
        }),
    )
    .unwrap_err();
    assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 78);
}
