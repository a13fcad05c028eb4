use crate::tracing_targets;

tracing_targets! {
    RENDERER = "renderer",
    PRESENT = "present",
    DRIVER = "driver",
}
