impl<FW, ES, AR> MenuInterceptor<FW, ES, AR>
where
    FW: FirmwareProbe,
    ES: EventSink,
    AR: ActionRunner,
{
    /// Replay protocol forcing the firmware to redraw a sub-page whose
    /// backing data changed. The firmware has no refresh primitive, so
    /// the only way is to leave the information screen, re-enter it
    /// from the main menu, and press forward until the previous page
    /// is visible again.
    ///
    /// Assumes the information entry is the first main-menu item.
    fn force_redraw(&mut self, depth: usize) {
        self.firmware.reset_info_screen();
        // selecting "back"
        self.sink.deliver(Event::gpio(BUTTON_MENU));
        // pressing "back"
        self.sink.deliver(Event::gpio(BUTTON_POWER));
        // selecting "device information"
        self.sink.deliver(Event::gpio(BUTTON_MENU));
        // pressing "device information"
        self.sink.deliver(Event::gpio(BUTTON_POWER));

        // advancing to the exact page we were on
        for _ in 0..=depth {
            self.sink.deliver(Event::gpio(BUTTON_MENU));
        }
    }
}
