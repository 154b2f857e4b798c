use anyhow::{Context, Result};

use courseview_fetch::source_for;

use crate::app::Browser;

pub async fn run(site: &str, path: &str) -> Result<()> {
    let mut browser = Browser::init(source_for(site))
        .await
        .with_context(|| format!("사이트를 열 수 없습니다: {site}"))?;

    browser.select_path(path).await;
    println!("{}", browser.viewer().content);
    Ok(())
}
