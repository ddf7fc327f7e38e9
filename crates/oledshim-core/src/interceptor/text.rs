impl<FW, ES, AR> MenuInterceptor<FW, ES, AR>
where
    FW: FirmwareProbe,
    ES: EventSink,
    AR: ActionRunner,
{
    /// Text-formatting hook. `format` is the host's format key and
    /// `rendered` the string it already produced; recognized keys are
    /// rewritten in place. Returns whether the buffer changed.
    pub fn on_format(&mut self, format: &str, rendered: &mut TextBuf) -> bool {
        if text_policy::wants_blanking(rendered.as_str()) {
            rendered.clear();
            return true;
        }

        if text_policy::wants_truncation(format, rendered.as_str()) {
            return text_policy::truncate_visible(rendered);
        }

        if format == HOMEPAGE_FORMAT {
            debug!("homepage format intercepted, rendering menu block");
            let block = menu::render_block(&mut self.registry);
            rendered.clear();
            let _ = rendered.push_str(block.as_str());
            return true;
        }

        false
    }
}
