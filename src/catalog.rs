use crate::types::Service;

/// Static service catalog. Seeded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        let seed = [
            (
                1,
                "General Consultation",
                30,
                50.0,
                "General health checkup and consultation",
            ),
            (
                2,
                "Dental Checkup",
                45,
                75.0,
                "Complete dental examination and cleaning",
            ),
            (
                3,
                "Eye Examination",
                30,
                60.0,
                "Comprehensive eye health assessment",
            ),
            (
                4,
                "Physical Therapy",
                60,
                100.0,
                "Therapeutic exercise and rehabilitation",
            ),
            (
                5,
                "Skin Treatment",
                45,
                85.0,
                "Dermatology consultation and treatment",
            ),
        ];

        let services = seed
            .into_iter()
            .map(|(id, name, duration_minutes, price, description)| Service {
                id,
                name: name.to_string(),
                duration_minutes,
                price,
                description: description.to_string(),
            })
            .collect();

        Self { services }
    }
}

impl ServiceCatalog {
    pub fn list(&self) -> &[Service] {
        &self.services
    }

    pub fn find(&self, id: u32) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }
}
