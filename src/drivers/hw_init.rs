//! One-shot hardware peripheral initialization.
//!
//! Configures the pH-proxy ADC channel and the nutrient presence inputs
//! using raw ESP-IDF sys calls. Called once from `main()` before the
//! control loop starts. The relay, indicator and DHT22 lines are owned by
//! `esp-idf-hal` pin drivers in the hardware adapter instead.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;
#[cfg(target_os = "espidf")]
use log::{error, info};

use crate::error::Result;
#[cfg(target_os = "espidf")]
use crate::error::Error;
#[cfg(target_os = "espidf")]
use crate::pins;

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<()> {
    // SAFETY: Called once from main() before the control loop; single-threaded.
    unsafe {
        init_adc()?;
        init_presence_inputs()?;
    }
    info!("hw_init: all peripherals configured");
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn init_peripherals() -> Result<()> {
    log::info!("hw_init(sim): peripheral init skipped");
    Ok(())
}

// ── ADC (oneshot) ─────────────────────────────────────────────

#[cfg(target_os = "espidf")]
static mut ADC1_HANDLE: adc_oneshot_unit_handle_t = core::ptr::null_mut();

/// SAFETY: Must be called only from the single-threaded init path or the
/// main-loop ADC read path. `init_adc()` completes before the loop starts.
#[cfg(target_os = "espidf")]
unsafe fn adc1_handle() -> adc_oneshot_unit_handle_t {
    unsafe { ADC1_HANDLE }
}

#[cfg(target_os = "espidf")]
unsafe fn init_adc() -> Result<()> {
    let init_cfg = adc_oneshot_unit_init_cfg_t {
        unit_id: adc_unit_t_ADC_UNIT_1,
        ulp_mode: adc_ulp_mode_t_ADC_ULP_MODE_DISABLE,
        ..Default::default()
    };
    // SAFETY: ADC1_HANDLE is only written here, once at boot.
    let ret = unsafe { adc_oneshot_new_unit(&init_cfg, &raw mut ADC1_HANDLE) };
    if ret != ESP_OK as i32 {
        error!("hw_init: adc_oneshot_new_unit rc={}", ret);
        return Err(Error::Init("ADC1 unit"));
    }

    // 12 dB attenuation: full 0 – 3.3 V swing of the LDR divider.
    let chan_cfg = adc_oneshot_chan_cfg_t {
        atten: adc_atten_t_ADC_ATTEN_DB_12,
        bitwidth: adc_bitwidth_t_ADC_BITWIDTH_12,
    };
    let ret = unsafe { adc_oneshot_config_channel(adc1_handle(), pins::PH_ADC1_CHANNEL, &chan_cfg) };
    if ret != ESP_OK as i32 {
        error!("hw_init: adc_oneshot_config_channel rc={}", ret);
        return Err(Error::Init("ADC1 pH channel"));
    }

    info!("hw_init: ADC1 configured (CH{}=pH proxy)", pins::PH_ADC1_CHANNEL);
    Ok(())
}

/// Raw 12-bit sample from an ADC1 channel; 0 on a driver error.
#[cfg(target_os = "espidf")]
pub fn adc1_read(channel: u32) -> u16 {
    let mut raw: i32 = 0;
    // SAFETY: adc1_handle() contract, single-threaded main-loop access only.
    let ret = unsafe { adc_oneshot_read(adc1_handle(), channel, &mut raw) };
    if ret != ESP_OK as i32 {
        log::warn!("ADC1 CH{} read failed rc={}", channel, ret);
        return 0;
    }
    raw.clamp(0, i32::from(pins::ADC_RAW_MAX)) as u16
}

// ── GPIO inputs ───────────────────────────────────────────────

#[cfg(target_os = "espidf")]
unsafe fn init_presence_inputs() -> Result<()> {
    for &pin in &[pins::PHOSPHORUS_GPIO, pins::POTASSIUM_GPIO] {
        let cfg = gpio_config_t {
            pin_bit_mask: 1u64 << pin,
            mode: gpio_mode_t_GPIO_MODE_INPUT,
            pull_up_en: gpio_pullup_t_GPIO_PULLUP_ENABLE,
            pull_down_en: gpio_pulldown_t_GPIO_PULLDOWN_DISABLE,
            intr_type: gpio_int_type_t_GPIO_INTR_DISABLE,
        };
        let ret = unsafe { gpio_config(&cfg) };
        if ret != ESP_OK as i32 {
            error!("hw_init: gpio_config({}) rc={}", pin, ret);
            return Err(Error::Init("presence inputs"));
        }
    }

    info!("hw_init: presence inputs configured (pull-up)");
    Ok(())
}

#[cfg(target_os = "espidf")]
pub fn gpio_read(pin: i32) -> bool {
    // SAFETY: gpio_get_level is a read-only register access on an
    // already-configured input pin.
    (unsafe { gpio_get_level(pin) }) != 0
}
