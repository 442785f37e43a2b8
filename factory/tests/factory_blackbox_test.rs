use multiversx_sc_scenario::imports::*;

use crowdfund_campaign::campaign_proxy::CampaignProxy;
use crowdfund_campaign::errors::ERR_ZERO_MINIMUM;
use crowdfund_factory::factory_proxy::CampaignFactoryProxy;
use crowdfund_factory::ERR_INVALID_TEMPLATE;

const FACTORY_CODE_PATH: MxscPath = MxscPath::new("output/crowdfund-factory.mxsc.json");
const CAMPAIGN_CODE_PATH: MxscPath = MxscPath::new("../output/crowdfund-campaign.mxsc.json");

const OWNER: TestAddress = TestAddress::new("owner");
const ALICE: TestAddress = TestAddress::new("alice");
const BOB: TestAddress = TestAddress::new("bob");
const RECIPIENT: TestAddress = TestAddress::new("recipient");

const TEMPLATE: TestSCAddress = TestSCAddress::new("campaign-template");
const FACTORY: TestSCAddress = TestSCAddress::new("factory");
const FIRST_CAMPAIGN: TestSCAddress = TestSCAddress::new("first-campaign");
const SECOND_CAMPAIGN: TestSCAddress = TestSCAddress::new("second-campaign");

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();
    blockchain.register_contract(FACTORY_CODE_PATH, crowdfund_factory::ContractBuilder);
    blockchain.register_contract(CAMPAIGN_CODE_PATH, crowdfund_campaign::ContractBuilder);
    blockchain
}

fn setup() -> ScenarioWorld {
    let mut world = world();

    world.account(OWNER).nonce(1u64);
    world.account(ALICE).nonce(1u64).balance(1_000u64);
    world.account(BOB).nonce(1u64).balance(1_000u64);
    world.account(RECIPIENT).nonce(1u64);

    world
        .tx()
        .from(OWNER)
        .typed(CampaignProxy)
        .init(1u64, OptionalValue::<ManagedAddress<StaticApi>>::None)
        .code(CAMPAIGN_CODE_PATH)
        .new_address(TEMPLATE)
        .run();

    world
        .tx()
        .from(OWNER)
        .typed(CampaignFactoryProxy)
        .init(TEMPLATE.to_address())
        .code(FACTORY_CODE_PATH)
        .new_address(FACTORY)
        .run();

    // campaigns deployed by the factory, by the factory's nonce
    world.set_state_step(
        SetStateStep::new()
            .new_address("sc:factory", 0, "sc:first-campaign")
            .new_address("sc:factory", 1, "sc:second-campaign"),
    );

    world
}

fn create_campaign(world: &mut ScenarioWorld, creator: TestAddress, minimum: u64) -> Address {
    world
        .tx()
        .from(creator)
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .create_campaign(minimum)
        .returns(ReturnsResultUnmanaged)
        .run()
}

fn deployed_campaigns(world: &mut ScenarioWorld) -> Vec<Address> {
    world
        .query()
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .get_deployed_campaigns()
        .returns(ReturnsResult)
        .run()
        .into_iter()
        .map(|campaign| campaign.to_address())
        .collect()
}

#[test]
fn starts_empty() {
    let mut world = setup();

    assert!(deployed_campaigns(&mut world).is_empty());
    world
        .query()
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .get_deployed_campaigns_count()
        .returns(ExpectValue(0u64))
        .run();

    let template = world
        .query()
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .get_campaign_template()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(template, TEMPLATE.to_address());
}

#[test]
fn create_campaign_lists_it_with_caller_as_manager() {
    let mut world = setup();

    let campaign = create_campaign(&mut world, ALICE, 100);
    assert_eq!(campaign, FIRST_CAMPAIGN.to_address());
    assert_eq!(deployed_campaigns(&mut world), vec![FIRST_CAMPAIGN.to_address()]);

    let manager = world
        .query()
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .get_manager()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(manager, ALICE.to_address());

    world
        .query()
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .get_minimum_contribution()
        .returns(ExpectValue(100u64))
        .run();
}

#[test]
fn campaigns_keep_creation_order_and_separate_state() {
    let mut world = setup();

    create_campaign(&mut world, ALICE, 100);
    create_campaign(&mut world, BOB, 50);

    assert_eq!(
        deployed_campaigns(&mut world),
        vec![FIRST_CAMPAIGN.to_address(), SECOND_CAMPAIGN.to_address()]
    );
    world
        .query()
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .get_deployed_campaigns_count()
        .returns(ExpectValue(2u64))
        .run();

    world
        .tx()
        .from(BOB)
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .contribute()
        .egld(200u64)
        .run();

    world
        .query()
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .get_approvers_count()
        .returns(ExpectValue(1u64))
        .run();
    world
        .query()
        .to(SECOND_CAMPAIGN)
        .typed(CampaignProxy)
        .get_approvers_count()
        .returns(ExpectValue(0u64))
        .run();
    world.check_account(FIRST_CAMPAIGN).balance(200u64);
    world.check_account(SECOND_CAMPAIGN).balance(0u64);
}

#[test]
fn factory_campaign_full_flow() {
    let mut world = setup();
    create_campaign(&mut world, ALICE, 100);

    world
        .tx()
        .from(BOB)
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .contribute()
        .egld(300u64)
        .run();

    let request_index: u64 = world
        .tx()
        .from(ALICE)
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .create_request("Venue deposit", 250u64, RECIPIENT.to_address())
        .returns(ReturnsResult)
        .run();

    world
        .tx()
        .from(BOB)
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .approve_request(request_index)
        .run();

    // the factory owner is not the campaign manager
    world
        .tx()
        .from(OWNER)
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .finalize_request(request_index)
        .returns(ExpectError(4, crowdfund_campaign::errors::ERR_NOT_MANAGER))
        .run();

    world
        .tx()
        .from(ALICE)
        .to(FIRST_CAMPAIGN)
        .typed(CampaignProxy)
        .finalize_request(request_index)
        .run();

    world.check_account(RECIPIENT).balance(250u64);
    world.check_account(FIRST_CAMPAIGN).balance(50u64);
}

#[test]
fn zero_minimum_is_rejected() {
    let mut world = setup();

    world
        .tx()
        .from(ALICE)
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .create_campaign(0u64)
        .returns(ExpectError(4, ERR_ZERO_MINIMUM))
        .run();

    assert!(deployed_campaigns(&mut world).is_empty());
}

#[test]
fn only_owner_changes_template() {
    let mut world = setup();

    world
        .tx()
        .from(ALICE)
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .set_campaign_template(FACTORY.to_address())
        .returns(ExpectError(4, "Endpoint can only be called by owner"))
        .run();

    world
        .tx()
        .from(OWNER)
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .set_campaign_template(ALICE.to_address())
        .returns(ExpectError(4, ERR_INVALID_TEMPLATE))
        .run();

    let template = world
        .query()
        .to(FACTORY)
        .typed(CampaignFactoryProxy)
        .get_campaign_template()
        .returns(ReturnsResultUnmanaged)
        .run();
    assert_eq!(template, TEMPLATE.to_address());
}
