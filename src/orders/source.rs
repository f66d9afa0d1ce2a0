use std::{fs::File, io::Read, path::Path};

use tracing::{info, warn};

use super::{Error, NewOrder, OrderStore};

impl OrderStore {
    /// Seeds the store from a CSV file with the header
    /// `customerName,deliveryAddress,latitude,longitude,status`.
    pub fn load_csv<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, self::Error> {
        let file = File::open(path.as_ref())?;
        let loaded = self.load_reader(file)?;
        info!("Loaded {loaded} orders from {}", path.as_ref().display());
        Ok(loaded)
    }

    /// Rows that fail to parse or validate are skipped with a warning.
    /// Empty coordinate cells are read as absent.
    pub fn load_reader<R: Read>(&mut self, reader: R) -> Result<usize, self::Error> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(self::Error::Invalid("csv source is missing header".into()));
        }

        let mut loaded = 0;
        for (line, row) in reader.deserialize::<NewOrder>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(err) => {
                    warn!("Skipping csv row {}: {err}", line + 1);
                    continue;
                }
            };
            match self.insert(row) {
                Ok(_) => loaded += 1,
                Err(err) => warn!("Skipping csv row {}: {err}", line + 1),
            }
        }
        Ok(loaded)
    }
}

/// Fixed set of orders around Manhattan used for demos and smoke tests.
pub fn samples() -> Vec<NewOrder> {
    [
        ("John Smith", "123 Main St, New York, NY", 40.7128, -74.0060),
        ("Sarah Johnson", "456 Broadway, New York, NY", 40.7589, -73.9851),
        ("Mike Davis", "789 5th Ave, New York, NY", 40.7505, -73.9934),
        ("Emily Wilson", "321 Park Ave, New York, NY", 40.7489, -73.9857),
        ("David Brown", "654 Lexington Ave, New York, NY", 40.7505, -73.9934),
    ]
    .into_iter()
    .map(|(name, address, latitude, longitude)| NewOrder {
        customer_name: name.into(),
        delivery_address: address.into(),
        latitude: Some(latitude),
        longitude: Some(longitude),
        status: "pending".into(),
    })
    .collect()
}
