/// One GET per call, no retries. Reading the body to completion via
/// `bytes()` hands the pooled connection back on success and failure
/// alike.
pub(crate) async fn get_bytes(
    client: &reqwest::Client,
    url: &str,
) -> Result<bytes::Bytes, crate::error::Error> {
    let response = client.get(url).send().await?.error_for_status()?;

    Ok(response.bytes().await?)
}
