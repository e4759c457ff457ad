pub const DEFAULT_ADDRESS: u8 = 0x70;
pub const MAX_BRIGHTNESS: u8 = 15; // 4 bits
pub const COLUMN_STRIDE: u8 = 2; // display RAM holds two row bytes per column

#[allow(dead_code)]
pub mod command {
    pub const SYSTEM_SETUP: u8 = 0x20;
    pub const DISPLAY_SETUP: u8 = 0x80;
    pub const BRIGHTNESS: u8 = 0xE0;

    pub mod system_setup {
        pub const OSCILLATOR_ON: u8 = 0x01; // bit 0 set: internal oscillator running
        pub const OSCILLATOR_OFF: u8 = 0x00; // bit 0 clear: standby mode
    }

    pub mod display_setup {
        pub const DISPLAY_ON: u8 = 0x01; // bit 0 set: display output enabled
        pub const DISPLAY_OFF: u8 = 0x00; // bit 0 clear: display output disabled
    }
}
