use crate::domain::{Document, DocumentMetadata};

/// The renewable energy knowledge base the assistant answers from.
pub fn default_documents() -> Vec<Document> {
    vec![
        Document::new(
            "solar-basics",
            "Solar Energy Fundamentals",
            "solar",
            "Solar energy is generated through photovoltaic (PV) panels that convert sunlight into electricity. A typical rooftop solar system includes solar panels, an inverter, mounting structure, and electrical components.

Key benefits include:
- Reduced electricity bills by 70-90%
- 25-year system warranty
- Environmental sustainability
- Increased property value
- Energy independence

System sizing: 1kW system generates approximately 4-5 units per day depending on location and weather conditions. For every ₹1000 monthly electricity bill, you need approximately 1kW solar capacity.

Installation process: Site survey → System design → Approvals → Installation → Grid connection → Net metering setup",
        )
        .with_metadata(DocumentMetadata::read_time(5).with_difficulty("beginner")),
        Document::new(
            "pm-kusum-scheme",
            "PM-KUSUM Scheme Details",
            "schemes",
            "The Pradhan Mantri Kisan Urja Suraksha evam Utthaan Mahabhiyan (PM-KUSUM) is a central government scheme with three components:

Component A: 10,000 MW of Decentralized Ground Mounted Grid Connected Renewable Power Plants
- Capacity: 500 kW to 2 MW
- Subsidy: 30% by Central Government, 30% by State Government
- Farmer contribution: 10%, remaining 30% through bank loan

Component B: Installation of 20 Lakh Standalone Solar Powered Agriculture Pumps
- Pump capacity: 7.5 HP
- Subsidy: 30% Central + 30% State + 10% Farmer + 30% bank loan
- Direct benefit transfer to farmer accounts

Component C: Solarisation of 15 Lakh Grid Connected Agriculture Pumps
- Individual pump capacity: 7.5 HP
- Subsidy structure same as Component B
- Reduces electricity subsidy burden on state governments

Eligibility: All categories of farmers including FPOs, cooperatives, panchayats, and Kisan Udyog Groups",
        )
        .with_metadata(DocumentMetadata::read_time(7).with_last_updated(2024, 3, 15)),
        Document::new(
            "rooftop-solar-subsidy",
            "Rooftop Solar Subsidy Scheme",
            "schemes",
            "Central Government Subsidy for Rooftop Solar (Grid Connected):

Residential Sector Subsidy Rates:
- Up to 3kW: 40% of benchmark cost or ₹18,000 per kW, whichever is lower
- Above 3kW and up to 10kW: 20% of benchmark cost or ₹9,000 per kW for capacity above 3kW
- Above 10kW: No central subsidy (state subsidies may apply)

Group Housing Society/Residential Welfare Association:
- Up to 500kW: 20% of benchmark cost or ₹9,000 per kW, whichever is lower

Institutional Sector:
- Up to 500kW: 20% of benchmark cost

Implementation: Through state nodal agencies and empaneled installers. Direct Benefit Transfer (DBT) to beneficiary accounts after installation and commissioning.

Net Metering: Bi-directional meter installed for selling excess power to grid. Settlement on annual basis with feed-in tariff rates.

Documents Required: Identity proof, address proof, electricity bill, bank account details, roof rights certificate",
        )
        .with_metadata(DocumentMetadata::read_time(6).with_last_updated(2024, 3, 10)),
        Document::new(
            "wind-energy-rural",
            "Small Wind Energy Systems for Rural Areas",
            "wind",
            "Small wind energy systems (up to 25kW) are suitable for rural and remote areas with good wind resources.

Types of Small Wind Systems:
- Horizontal axis wind turbines (HAWT): More efficient, suitable for areas with consistent wind direction
- Vertical axis wind turbines (VAWT): Suitable for turbulent wind conditions, easier maintenance

Site Requirements:
- Average wind speed: Minimum 4-5 m/s at hub height
- Clear area: 150m radius from turbine
- Height: 10-30 meters above ground
- Away from obstacles like buildings and trees

Cost Economics:
- Capital cost: ₹3-5 lakhs per kW
- Operation & Maintenance: 2-3% of capital cost annually
- Capacity Utilization Factor: 15-25% depending on wind resource
- Payback period: 8-12 years

Government Support:
- Accelerated depreciation: 40% in first year for commercial installations
- Generation Based Incentive (GBI): ₹0.50 per kWh for first 10 years
- Concessional customs duty on wind turbine components

Applications: Water pumping, battery charging, grid-connected power generation, hybrid systems with solar PV",
        )
        .with_metadata(DocumentMetadata::read_time(8).with_applications([
            "water-pumping",
            "grid-connected",
            "hybrid",
        ])),
        Document::new(
            "biogas-systems",
            "Biogas Systems and Government Support",
            "biogas",
            "Biogas is produced through anaerobic digestion of organic waste including cattle dung, kitchen waste, crop residues, and other biomass.

Types of Biogas Plants:
- Fixed dome (Chinese model): Low maintenance, longer life, suitable for cold regions
- Floating gas holder (Indian model): Easy operation, immediate gas indication
- Balloon type: Low cost, suitable for small families
- Prefabricated: Quick installation, good for demonstration

Family Size and Plant Capacity:
- 4-6 members: 2 cubic meter plant (8-10 kg fresh dung daily)
- 6-8 members: 3 cubic meter plant (12-15 kg fresh dung daily)
- 8-10 members: 4 cubic meter plant (16-20 kg fresh dung daily)

Government Schemes:
- National Biogas and Manure Management Programme (NBMMP)
- Central subsidy: ₹10,000-15,000 per plant depending on type and size
- State subsidies: Additional ₹2,000-5,000 (varies by state)
- Special subsidies for SC/ST/BPL families: Up to 90% of cost

Benefits:
- Clean cooking fuel equivalent to 3-4 LPG cylinders per month
- Organic fertilizer (slurry) for agriculture
- Reduced drudgery for women
- Reduction in indoor air pollution
- Carbon credits eligibility

Installation: Through state implementing agencies and trained masons. 6-8 weeks construction period with 1-year maintenance warranty.",
        )
        .with_metadata(DocumentMetadata::read_time(9).with_beneficiaries(5_000_000)),
        Document::new(
            "energy-efficiency",
            "Energy Efficiency Measures for Rural Areas",
            "efficiency",
            "Energy efficiency is the most cost-effective way to reduce energy consumption and bills.

LED Lighting:
- 80% less energy consumption than incandescent bulbs
- 25 times longer lifespan
- Government schemes: UJALA - LEDs at ₹40-70 per bulb
- Rural applications: Street lighting, household lighting, agricultural applications

Energy Efficient Appliances:
- Star-rated refrigerators, air conditioners, washing machines
- BEE (Bureau of Energy Efficiency) star labels indicate efficiency
- 5-star appliances consume 40-50% less energy than 3-star
- EESL bulk procurement makes efficient appliances affordable

Agricultural Energy Efficiency:
- Star-rated agricultural pump sets
- Efficient motors and controllers
- Solar water pumping systems
- Precision farming techniques
- Drip irrigation systems

Building Efficiency:
- Thermal insulation using locally available materials
- Natural ventilation design
- Orientation for maximum solar gain in winter, minimum in summer
- Cool roofs with reflective materials
- Energy efficient construction materials

Government Programs:
- Perform, Achieve and Trade (PAT) scheme
- Standards & Labeling Programme
- Energy Efficiency in SMEs
- Municipal Energy Efficiency Programme (MEEP)

Rural Specific Measures:
- Biomass cook stoves (80% efficiency vs 15% in traditional chulhas)
- Solar water heating systems
- Passive solar building design
- Community-based energy management",
        )
        .with_metadata(DocumentMetadata::read_time(7).with_savings_potential("30-50%")),
    ]
}
