impl<FW, ES, AR> MenuInterceptor<FW, ES, AR>
where
    FW: FirmwareProbe,
    ES: EventSink,
    AR: ActionRunner,
{
    /// Notification hook in front of the firmware's real async notify
    /// handler. Rules are evaluated in order; first match wins.
    pub fn on_event(&mut self, event: Event) -> i32 {
        debug!(
            "notify: subsystem={} action={} subaction={:#x}",
            event.subsystem, event.action, event.subaction
        );

        if event.subsystem == EVT_OLED_WIFI_WAKEUP {
            // Keeps the "exiting sleep mode" animation from firing on
            // every button press while Wi-Fi is disabled.
            return HANDLED;
        }

        let screen = self.firmware.current_screen();

        if screen == ScreenState::Information
            && event.subsystem == EVT_DIALUP_REPORT_CONNECT_STATE
            && event.action == DIAL_STATE_CONNECTING
        {
            // No connection animation while the user navigates the menu.
            return HANDLED;
        }

        if screen == ScreenState::Information {
            let info = self.firmware.info_screen();
            if self.tracker.away_from_home(info) {
                if event.subsystem == SUBSYSTEM_GPIO
                    && self.firmware.indicator() == IndicatorState::On
                {
                    if self.buttons_locked {
                        // Synthetic replay in flight; swallow the echo.
                        return HANDLED;
                    }
                    if event.action == BUTTON_POWER {
                        return self.select_current_item(event);
                    }
                    if event.action == BUTTON_MENU {
                        self.tracker.advance_cursor();
                    }
                }
            } else {
                self.tracker.reset_cursor();
            }
        }

        self.sink.deliver(event)
    }

    /// Primary-button press on a non-home information sub-page:
    /// advance the highlighted feature, replay navigation so the
    /// firmware redraws the page, then forward the press transformed
    /// into a menu-button event.
    fn select_current_item(&mut self, event: Event) -> i32 {
        let item = self.tracker.cursor();
        debug!("primary button on menu item {item}");

        self.buttons_locked = true;
        self.registry.advance(item);
        self.force_redraw(item);
        self.buttons_locked = false;

        self.sink
            .deliver(Event::new(event.subsystem, BUTTON_MENU, event.subaction))
    }
}
