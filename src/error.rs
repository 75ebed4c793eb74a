//! Error types for orbfield.
//!
//! Covers GPU initialization, particle placement, and event-loop setup.
//! Physics itself has no failure paths; all of its inputs are internally
//! generated.

use std::fmt;

/// Errors that can occur during GPU initialization.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    AdapterRequest(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::AdapterRequest(e) => write!(
                f,
                "No compatible GPU adapter found ({}). Ensure your system has a GPU with Vulkan/Metal/DX12 support.",
                e
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::AdapterRequest(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for GpuError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        GpuError::AdapterRequest(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur while placing particles.
#[derive(Debug)]
pub enum SpawnError {
    /// The viewport cannot hold even one particle of the configured radius.
    ViewportTooSmall { width: f32, height: f32, radius: f32 },
    /// Rejection sampling ran out of attempts; the viewport is too dense for
    /// the requested count.
    PlacementExhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::ViewportTooSmall { width, height, radius } => write!(
                f,
                "Viewport {}x{} cannot hold a particle of radius {}",
                width, height, radius
            ),
            SpawnError::PlacementExhausted { placed, requested, attempts } => write!(
                f,
                "Cannot place particle {} of {} without overlap after {} attempts",
                placed + 1,
                requested,
                attempts
            ),
        }
    }
}

impl std::error::Error for SpawnError {}

/// Errors that can occur when running a simulation.
#[derive(Debug)]
pub enum SimulationError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
    /// Initial particle placement failed.
    Spawn(SpawnError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            SimulationError::Window(e) => write!(f, "Failed to create window: {}", e),
            SimulationError::Gpu(e) => write!(f, "GPU error: {}", e),
            SimulationError::Spawn(e) => write!(f, "Spawn error: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::EventLoop(e) => Some(e),
            SimulationError::Window(e) => Some(e),
            SimulationError::Gpu(e) => Some(e),
            SimulationError::Spawn(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for SimulationError {
    fn from(e: winit::error::EventLoopError) -> Self {
        SimulationError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for SimulationError {
    fn from(e: winit::error::OsError) -> Self {
        SimulationError::Window(e)
    }
}

impl From<GpuError> for SimulationError {
    fn from(e: GpuError) -> Self {
        SimulationError::Gpu(e)
    }
}

impl From<SpawnError> for SimulationError {
    fn from(e: SpawnError) -> Self {
        SimulationError::Spawn(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_spawn_error_wraps_into_simulation_error() {
        let e = SpawnError::PlacementExhausted {
            placed: 3,
            requested: 10,
            attempts: 100,
        };
        let wrapped = SimulationError::from(e);

        assert!(matches!(wrapped, SimulationError::Spawn(_)));
        let msg = wrapped.to_string();
        assert!(msg.contains("Spawn error"));
        assert!(msg.contains("particle 4 of 10"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_viewport_too_small_message() {
        let e = SpawnError::ViewportTooSmall {
            width: 30.0,
            height: 600.0,
            radius: 20.0,
        };
        let msg = e.to_string();
        assert!(msg.contains("30"));
        assert!(msg.contains("radius 20"));
    }
}
