//! Part/Material manager contracts (§6) — the catalog layer callers use to
//! build up validated input before calling [`crate::optimizer::optimize`]
//! (C9).

use crate::errors::ValidationError;
use crate::geometry;
use crate::models::material::{Material, MaterialId};
use crate::models::part::{Part, PartAngles, PartId};

/// CRUD + derived-query manager for stock bar types.
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
    next_id: MaterialId,
}

impl MaterialCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects non-positive/non-finite lengths and duplicate lengths.
    pub fn add_material(&mut self, length: f64) -> Result<MaterialId, ValidationError> {
        if !length.is_finite() || length <= 0.0 {
            return Err(ValidationError::InvalidMaterialLength { length });
        }
        if self.materials.iter().any(|m| m.length == length) {
            return Err(ValidationError::DuplicateMaterialLength { length });
        }
        let id = self.next_id;
        self.next_id += 1;
        self.materials.push(Material::new(id, length));
        Ok(id)
    }

    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    pub fn remove(&mut self, id: MaterialId) -> Option<Material> {
        let index = self.materials.iter().position(|m| m.id == id)?;
        Some(self.materials.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn longest(&self) -> Option<&Material> {
        self.materials
            .iter()
            .max_by(|a, b| a.length.partial_cmp(&b.length).unwrap())
    }

    pub fn shortest(&self) -> Option<&Material> {
        self.materials
            .iter()
            .min_by(|a, b| a.length.partial_cmp(&b.length).unwrap())
    }

    pub fn by_length_range(&self, min: f64, max: f64) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.length >= min && m.length <= max)
            .collect()
    }
}

/// CRUD + derived-query manager for demanded parts.
#[derive(Debug, Clone, Default)]
pub struct PartCatalog {
    parts: Vec<Part>,
    next_id: PartId,
}

impl PartCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates angles per [`geometry::validate_part_angles`] and numeric
    /// constraints; `quantity = 0` is accepted (the part is skipped
    /// downstream, per the data model's lifecycle rule).
    pub fn add_part(
        &mut self,
        length: f64,
        quantity: u32,
        angles: PartAngles,
        thickness: f64,
    ) -> Result<PartId, Vec<ValidationError>> {
        let mut violations = Vec::new();

        if !length.is_finite() || length <= 0.0 {
            violations.push(ValidationError::InvalidPartLength { length });
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            violations.push(ValidationError::InvalidPartThickness { thickness });
        }
        if let Err(angle_errors) = geometry::validate_part_angles(&angles) {
            violations.extend(angle_errors);
        }

        if !violations.is_empty() {
            return Err(violations);
        }

        let id = self.next_id;
        self.next_id += 1;
        self.parts
            .push(Part::new(id, length, quantity, angles).with_thickness(thickness));
        Ok(id)
    }

    pub fn get(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|p| p.id == id)
    }

    pub fn remove(&mut self, id: PartId) -> Option<Part> {
        let index = self.parts.iter().position(|p| p.id == id)?;
        Some(self.parts.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn longest(&self) -> Option<&Part> {
        self.parts
            .iter()
            .max_by(|a, b| a.length.partial_cmp(&b.length).unwrap())
    }

    pub fn shortest(&self) -> Option<&Part> {
        self.parts
            .iter()
            .min_by(|a, b| a.length.partial_cmp(&b.length).unwrap())
    }

    pub fn by_length_range(&self, min: f64, max: f64) -> Vec<&Part> {
        self.parts
            .iter()
            .filter(|p| p.length >= min && p.length <= max)
            .collect()
    }

    pub fn with_usable_angles(&self) -> Vec<&Part> {
        self.parts.iter().filter(|p| p.has_usable_angles()).collect()
    }

    pub fn by_thickness(&self, thickness: f64) -> Vec<&Part> {
        self.parts
            .iter()
            .filter(|p| (p.thickness - thickness).abs() < f64::EPSILON)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_material_length() {
        let mut catalog = MaterialCatalog::new();
        catalog.add_material(6000.0).unwrap();
        let err = catalog.add_material(6000.0).unwrap_err();
        assert_eq!(err, ValidationError::DuplicateMaterialLength { length: 6000.0 });
    }

    #[test]
    fn rejects_non_positive_material_length() {
        let mut catalog = MaterialCatalog::new();
        assert!(catalog.add_material(0.0).is_err());
        assert!(catalog.add_material(-5.0).is_err());
    }

    #[test]
    fn longest_and_shortest_material() {
        let mut catalog = MaterialCatalog::new();
        catalog.add_material(4000.0).unwrap();
        catalog.add_material(6000.0).unwrap();
        assert_eq!(catalog.longest().unwrap().length, 6000.0);
        assert_eq!(catalog.shortest().unwrap().length, 4000.0);
    }

    #[test]
    fn rejects_malformed_part_angles() {
        let mut catalog = PartCatalog::new();
        let angles = PartAngles {
            top_left: 45.0,
            bottom_left: 30.0,
            top_right: 0.0,
            bottom_right: 0.0,
        };
        let err = catalog.add_part(1500.0, 1, angles, 10.0).unwrap_err();
        assert_eq!(err.len(), 1);
    }

    #[test]
    fn accepts_zero_quantity_part() {
        let mut catalog = PartCatalog::new();
        let id = catalog
            .add_part(1500.0, 0, PartAngles::square(), 10.0)
            .unwrap();
        assert_eq!(catalog.get(id).unwrap().quantity, 0);
    }

    #[test]
    fn with_usable_angles_filters_square_parts() {
        let mut catalog = PartCatalog::new();
        catalog.add_part(1000.0, 1, PartAngles::square(), 10.0).unwrap();
        catalog
            .add_part(
                1000.0,
                1,
                PartAngles {
                    top_left: 45.0,
                    ..PartAngles::square()
                },
                10.0,
            )
            .unwrap();
        assert_eq!(catalog.with_usable_angles().len(), 1);
    }
}
