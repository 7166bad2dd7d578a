//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements       | Connects to                     |
//! |------------|------------------|---------------------------------|
//! | `hardware` | SensorPort       | DHT22, ESP32 ADC1, GPIO inputs  |
//! |            | ActuatorPort     | Pump relay, indicator LED       |
//! | `sim`      | SensorPort       | Simulated soil (host builds)    |
//! |            | ActuatorPort     | Simulated pump                  |
//! | `serial`   | TelemetrySink    | UART / USB-CDC console (stdout) |
//! | `system`   | SystemInfoPort   | ESP-IDF heap and clock queries  |
//! | `time`     | ClockPort        | ESP32 high-resolution timer     |

#[cfg(target_os = "espidf")]
pub mod hardware;
pub mod serial;
pub mod sim;
pub mod system;
pub mod time;
