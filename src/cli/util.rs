use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Attaches the ledger file path to persistence failures. Validation failures
/// pass through untouched since they concern the input, not the file.
pub fn store_context<T>(res: Result<T, base::store::Error>, fs: &base::Fs) -> anyhow::Result<T> {
    match res {
        Ok(x) => Ok(x),
        Err(e @ base::store::Error::Validation(_)) => Err(e.into()),
        Err(e) => Err(anyhow::Error::new(e).context(format!(
            "failed to update '{}'",
            fs.path::<base::Journal>().display()
        ))),
    }
}
