//! Engine-wide constants.
//!
//! Centralizes magic numbers and tuning values to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Grid & Snap
// ============================================================================

/// Side length of one grid cell in world units
pub const GRID_CELL_SIZE: f32 = 200.0;

/// Gap between adjacent grid cells in world units
pub const GRID_GAP: f32 = 20.0;

/// One grid slot: a cell plus its trailing gap
pub const GRID_SLOT_SIZE: f32 = GRID_CELL_SIZE + GRID_GAP;

/// Maximum distance at which a dragged position snaps to a grid line
pub const SNAP_POSITION_TOLERANCE: f32 = 40.0;

/// Maximum distance at which a resized extent snaps to a whole cell count
pub const SNAP_SIZE_TOLERANCE: f32 = 30.0;

/// Minimum item extent on either axis (half a grid cell)
pub const MIN_ITEM_SIZE: f32 = GRID_CELL_SIZE / 2.0;

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 5.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Additive zoom change per scrolled pixel
pub const ZOOM_WHEEL_STEP: f32 = 0.002;

/// Additive zoom change per scrolled line
pub const ZOOM_LINE_STEP: f32 = 0.1;

/// Pixels per scrolled line when panning
pub const SCROLL_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Inertia
// ============================================================================

/// Per-frame velocity decay while the camera coasts after a pan
pub const INERTIA_FRICTION: f32 = 0.92;

/// Velocity magnitude below which coasting stops, per axis
pub const INERTIA_MIN_VELOCITY: f32 = 0.1;

// ============================================================================
// Drag physics (tilt)
// ============================================================================

/// Hard clamp on drag tilt and resize rotation, in degrees
pub const MAX_TILT_DEGREES: f32 = 15.0;

/// Degrees of target tilt per pixel of horizontal pointer velocity
pub const TILT_VELOCITY_FACTOR: f32 = 0.6;

/// Easing rate while tilt magnitude is growing
pub const TILT_ACQUIRE_RATE: f32 = 0.45;

/// Easing rate while tilt magnitude is decaying
pub const TILT_RELEASE_RATE: f32 = 0.08;

/// Fraction of the live tilt kept as permanent rotation on release
pub const TILT_SETTLE_FRACTION: f32 = 0.5;

// ============================================================================
// Resize
// ============================================================================

/// Size of the resize corner hit area in screen pixels (at zoom 1.0)
pub const RESIZE_CORNER_SIZE: f32 = 30.0;

/// Extra slack outside the corner, in screen pixels
pub const RESIZE_CORNER_TOLERANCE: f32 = 5.0;

/// Damping applied to the corner-angle rotation during resize
pub const RESIZE_ROTATION_DAMPING: f32 = 0.3;

/// Angle of the resize handle diagonal, in degrees
pub const RESIZE_ROTATION_OFFSET_DEGREES: f32 = 45.0;

// ============================================================================
// Selection & Connections
// ============================================================================

/// Minimum lasso extent in screen pixels before it counts as a selection
pub const MIN_LASSO_SIZE: f32 = 5.0;

/// Maximum pointer travel in screen pixels for an affordance click
pub const CONNECT_CLICK_THRESHOLD: f32 = 5.0;

/// Hit radius around an edge affordance in screen pixels
pub const CONNECT_HANDLE_RADIUS: f32 = 14.0;

// ============================================================================
// Layout
// ============================================================================

/// Row cap for the bento occupancy grid
pub const BENTO_MAX_ROWS: usize = 100;

/// Rejection-sampling attempts per item in the scatter layout
pub const SCATTER_MAX_ATTEMPTS: usize = 80;

/// Base scatter radius in world units, scaled by sqrt(item count)
pub const SCATTER_BASE_RADIUS: f32 = 260.0;

/// Scatter rotation range, in degrees either side of zero
pub const SCATTER_MAX_TILT_DEGREES: f32 = 6.0;

/// Gap multiplier for compact spacing
pub const SPACING_COMPACT: f32 = 0.3;

/// Gap multiplier for comfortable spacing
pub const SPACING_COMFORTABLE: f32 = 1.0;

/// Gap multiplier for spacious spacing
pub const SPACING_SPACIOUS: f32 = 2.5;

// ============================================================================
// Viewport Culling
// ============================================================================

/// Margin in screen pixels around the viewport for culling (prevents pop-in at edges)
pub const CULLING_MARGIN: f32 = 50.0;
