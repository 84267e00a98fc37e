use serde::{Deserialize, Serialize};

use crate::domain::patterns::pattern_names;

/// Named palette used by the renderer, colors as `#RRGGBB`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub name: String,
    pub alive_color: String,
    pub dead_color: String,
    pub grid_color: String,
}

/// Scheme colors packed as ABGR (bytes [RR, GG, BB, AA] in memory)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeColors {
    pub alive: u32,
    pub dead: u32,
    pub grid: u32,
}

impl Default for SchemeColors {
    /// Classic: black on white with light grey lines
    fn default() -> Self {
        Self {
            alive: 0xFF000000,
            dead: 0xFFFFFFFF,
            grid: 0xFFCCCCCC,
        }
    }
}

impl ColorScheme {
    fn builtin(name: &str, alive: &str, dead: &str, grid: &str) -> Self {
        Self {
            name: name.to_string(),
            alive_color: alive.to_string(),
            dead_color: dead.to_string(),
            grid_color: grid.to_string(),
        }
    }

    pub fn colors(&self) -> Result<SchemeColors, String> {
        Ok(SchemeColors {
            alive: parse_hex_color(&self.alive_color)?,
            dead: parse_hex_color(&self.dead_color)?,
            grid: parse_hex_color(&self.grid_color)?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    pub width: u32,
    pub height: u32,
    pub label: String,
}

impl GridSize {
    fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
            label: format!("{}x{}", side, side),
        }
    }
}

/// Startup settings for the front-end
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub grid_size: GridSize,
    pub color_scheme: ColorScheme,
    /// Milliseconds between generations
    pub speed_ms: u32,
    pub min_speed_ms: u32,
    pub max_speed_ms: u32,
    /// Pixels per cell
    pub cell_size: u32,
    pub show_grid: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    color_schemes: Vec<ColorScheme>,
    grid_sizes: Vec<GridSize>,
    defaults: Settings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EngineConfig {
    pub fn builtin() -> Self {
        let color_schemes = vec![
            ColorScheme::builtin("Classic", "#000000", "#FFFFFF", "#CCCCCC"),
            ColorScheme::builtin("Dark Mode", "#00FF00", "#1a1a1a", "#333333"),
            ColorScheme::builtin("Ocean", "#00CED1", "#001F3F", "#0074D9"),
            ColorScheme::builtin("Sunset", "#FF6347", "#FFB6C1", "#8B0000"),
        ];
        let grid_sizes: Vec<GridSize> = [25, 50, 75, 100].into_iter().map(GridSize::square).collect();
        let defaults = Settings {
            grid_size: grid_sizes[1].clone(),
            color_scheme: color_schemes[0].clone(),
            speed_ms: 500,
            min_speed_ms: 100,
            max_speed_ms: 1000,
            cell_size: 10,
            show_grid: true,
        };
        Self {
            color_schemes,
            grid_sizes,
            defaults,
        }
    }

    /// Parse a JSON config. Sections left out fall back to the builtin ones.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let root: ConfigRoot = serde_json::from_str(json).map_err(|e| e.to_string())?;
        Self::from_root(root)
    }

    fn from_root(root: ConfigRoot) -> Result<Self, String> {
        let builtin = Self::builtin();
        let color_schemes = root.color_schemes.unwrap_or(builtin.color_schemes);
        let grid_sizes = root.grid_sizes.unwrap_or(builtin.grid_sizes);

        let fallback = &builtin.defaults;
        let d = root.defaults.unwrap_or_default();

        let grid_size = match d.grid_size {
            Some(label) => grid_sizes
                .iter()
                .find(|s| s.label == label)
                .cloned()
                .ok_or_else(|| format!("defaults.gridSize refers to unknown size: {}", label))?,
            None => grid_sizes
                .iter()
                .find(|s| s.label == fallback.grid_size.label)
                .or_else(|| grid_sizes.first())
                .cloned()
                .ok_or_else(|| "gridSizes must not be empty".to_string())?,
        };
        let color_scheme = match d.color_scheme {
            Some(name) => color_schemes
                .iter()
                .find(|s| s.name == name)
                .cloned()
                .ok_or_else(|| format!("defaults.colorScheme refers to unknown scheme: {}", name))?,
            None => color_schemes
                .iter()
                .find(|s| s.name == fallback.color_scheme.name)
                .or_else(|| color_schemes.first())
                .cloned()
                .ok_or_else(|| "colorSchemes must not be empty".to_string())?,
        };

        let config = Self {
            defaults: Settings {
                grid_size,
                color_scheme,
                speed_ms: d.speed_ms.unwrap_or(fallback.speed_ms),
                min_speed_ms: d.min_speed_ms.unwrap_or(fallback.min_speed_ms),
                max_speed_ms: d.max_speed_ms.unwrap_or(fallback.max_speed_ms),
                cell_size: d.cell_size.unwrap_or(fallback.cell_size),
                show_grid: d.show_grid.unwrap_or(fallback.show_grid),
            },
            color_schemes,
            grid_sizes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.color_schemes.is_empty() {
            return Err("colorSchemes must not be empty".to_string());
        }
        if self.grid_sizes.is_empty() {
            return Err("gridSizes must not be empty".to_string());
        }

        for (i, scheme) in self.color_schemes.iter().enumerate() {
            if self.color_schemes[..i].iter().any(|s| s.name == scheme.name) {
                return Err(format!("duplicate color scheme name: {}", scheme.name));
            }
            scheme
                .colors()
                .map_err(|e| format!("color scheme {}: {}", scheme.name, e))?;
        }

        for (i, size) in self.grid_sizes.iter().enumerate() {
            if self.grid_sizes[..i].iter().any(|s| s.label == size.label) {
                return Err(format!("duplicate grid size label: {}", size.label));
            }
            if size.width == 0 || size.height == 0 {
                return Err(format!(
                    "grid size {} has non-positive dimensions {}x{}",
                    size.label, size.width, size.height
                ));
            }
        }

        let d = &self.defaults;
        if d.min_speed_ms > d.max_speed_ms {
            return Err(format!(
                "minSpeedMs {} is greater than maxSpeedMs {}",
                d.min_speed_ms, d.max_speed_ms
            ));
        }
        if !(d.min_speed_ms..=d.max_speed_ms).contains(&d.speed_ms) {
            return Err(format!(
                "speedMs {} outside [{}, {}]",
                d.speed_ms, d.min_speed_ms, d.max_speed_ms
            ));
        }
        if d.cell_size == 0 {
            return Err("cellSize must be positive".to_string());
        }
        Ok(())
    }

    pub fn color_schemes(&self) -> &[ColorScheme] {
        &self.color_schemes
    }

    pub fn grid_sizes(&self) -> &[GridSize] {
        &self.grid_sizes
    }

    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }

    pub fn color_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.color_schemes.iter().find(|s| s.name == name)
    }

    pub fn grid_size(&self, label: &str) -> Option<&GridSize> {
        self.grid_sizes.iter().find(|s| s.label == label)
    }

    pub fn clamp_speed(&self, speed_ms: u32) -> u32 {
        speed_ms.clamp(self.defaults.min_speed_ms, self.defaults.max_speed_ms)
    }

    /// Everything the front-end needs to populate its controls. Defaults
    /// name their grid size and scheme, so the output parses back through
    /// `from_json`.
    pub fn manifest_json(&self) -> String {
        let out = ConfigManifest {
            format_version: 1,
            color_schemes: &self.color_schemes,
            grid_sizes: &self.grid_sizes,
            defaults: ManifestDefaults::from(&self.defaults),
            patterns: pattern_names(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

/// `#RRGGBB` to ABGR with full alpha
pub fn parse_hex_color(s: &str) -> Result<u32, String> {
    let hex = s
        .strip_prefix('#')
        .filter(|h| h.len() == 6 && h.bytes().all(|b| b.is_ascii_hexdigit()))
        .ok_or_else(|| format!("invalid color {:?}, expected #RRGGBB", s))?;
    let rgb = u32::from_str_radix(hex, 16).map_err(|e| e.to_string())?;
    let r = (rgb >> 16) & 0xFF;
    let g = (rgb >> 8) & 0xFF;
    let b = rgb & 0xFF;
    Ok(0xFF00_0000 | (b << 16) | (g << 8) | r)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigManifest<'a> {
    format_version: u32,
    color_schemes: &'a [ColorScheme],
    grid_sizes: &'a [GridSize],
    defaults: ManifestDefaults<'a>,
    patterns: Vec<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ManifestDefaults<'a> {
    grid_size: &'a str,
    color_scheme: &'a str,
    speed_ms: u32,
    min_speed_ms: u32,
    max_speed_ms: u32,
    cell_size: u32,
    show_grid: bool,
}

impl<'a> From<&'a Settings> for ManifestDefaults<'a> {
    fn from(d: &'a Settings) -> Self {
        Self {
            grid_size: &d.grid_size.label,
            color_scheme: &d.color_scheme.name,
            speed_ms: d.speed_ms,
            min_speed_ms: d.min_speed_ms,
            max_speed_ms: d.max_speed_ms,
            cell_size: d.cell_size,
            show_grid: d.show_grid,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigRoot {
    #[serde(default)]
    color_schemes: Option<Vec<ColorScheme>>,
    #[serde(default)]
    grid_sizes: Option<Vec<GridSize>>,
    #[serde(default)]
    defaults: Option<ConfigDefaults>,
}

/// Defaults refer to schemes and sizes by name
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigDefaults {
    #[serde(default)]
    grid_size: Option<String>,
    #[serde(default)]
    color_scheme: Option<String>,
    #[serde(default)]
    speed_ms: Option<u32>,
    #[serde(default)]
    min_speed_ms: Option<u32>,
    #[serde(default)]
    max_speed_ms: Option<u32>,
    #[serde(default)]
    cell_size: Option<u32>,
    #[serde(default)]
    show_grid: Option<bool>,
}
