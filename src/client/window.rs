/// Open `url` in a new browsing context.
pub fn open(url: &str) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(anyhow::anyhow!("popup blocked: {}", url)),
        Err(e) => Err(anyhow::anyhow!("window.open failed: {:?}", e)),
    }
}
