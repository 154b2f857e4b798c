use anyhow::{Context, Result};

use courseview_fetch::source_for;

use crate::app::Browser;

/// Replay a deep link: apply the fragment, then print the breadcrumb, the
/// canonical fragment for the resulting state, and the viewer content.
pub async fn run(site: &str, fragment: &str) -> Result<()> {
    let mut browser = Browser::init(source_for(site))
        .await
        .with_context(|| format!("사이트를 열 수 없습니다: {site}"))?;

    browser.apply_route(fragment).await;

    let viewer = browser.viewer();
    if !viewer.breadcrumb.is_empty() {
        println!("{}", viewer.breadcrumb);
    }
    println!("{}", browser.current_fragment());
    println!("{}", viewer.content);
    Ok(())
}
